use quick_xml::escape::escape;

/// Largest escaped chunk sent in one SSML message. The provider caps a
/// websocket message at 64 KiB; the rest covers headers and the envelope.
pub const MAX_CHUNK_BYTES: usize = 64 * 1024 - 2048;

/// Make request text safe to embed in SSML.
///
/// Control characters the provider refuses (everything below U+0020
/// except tab, newline and carriage return) become spaces, then the XML
/// metacharacters are escaped.
pub fn escape_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => c,
            c if (c as u32) < 0x20 => ' ',
            c => c,
        })
        .collect();

    escape(cleaned.as_str()).into_owned()
}

/// Voice names end up inside a quoted attribute.
pub fn escape_voice(voice: &str) -> String {
    escape(voice).into_owned()
}

/// Split escaped text into chunks of at most `max_bytes` bytes.
///
/// Cuts prefer the last newline, then the last space, inside the window.
/// A cut never lands inside a UTF-8 sequence or an `&...;` entity.
/// Chunks are trimmed and empty ones dropped.
pub fn split_escaped(text: &str, max_bytes: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.len() > max_bytes {
        let cut = split_point(rest, max_bytes);
        let (head, tail) = rest.split_at(cut);
        push_trimmed(&mut chunks, head);
        rest = tail;
    }
    push_trimmed(&mut chunks, rest);

    chunks
}

fn split_point(text: &str, max_bytes: usize) -> usize {
    let mut limit = max_bytes;
    while !text.is_char_boundary(limit) {
        limit -= 1;
    }
    let window = &text[..limit];

    let mut cut = window
        .rfind('\n')
        .or_else(|| window.rfind(' '))
        .map(|idx| idx + 1)
        .unwrap_or(limit);

    // Back off to the start of an entity that would otherwise be cut
    if let Some(amp) = text[..cut].rfind('&') {
        if !text[amp..cut].contains(';') {
            cut = amp;
        }
    }

    if cut == 0 {
        // An entity sits at the very start; entities are short, so the
        // whole window can be taken after it.
        cut = text[..limit].find(';').map(|idx| idx + 1).unwrap_or(limit);
    }

    cut
}

fn push_trimmed(chunks: &mut Vec<String>, chunk: &str) {
    let chunk = chunk.trim();
    if !chunk.is_empty() {
        chunks.push(chunk.to_string());
    }
}
