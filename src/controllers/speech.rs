use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use futures::StreamExt;
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::{
    domain::speech::{SpeechRequest, SpeechServiceApi},
    error::AppResult,
    infrastructure::http::JsonPayload,
};

pub const AUDIO_MPEG: &str = "audio/mpeg";

pub struct SpeechController {
    speech_service: Arc<dyn SpeechServiceApi>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<dyn SpeechServiceApi>) -> Self {
        Self { speech_service }
    }

    /// POST /v1/audio/speech - Convert text to speech
    pub async fn create_speech(
        State(controller): State<Arc<SpeechController>>,
        JsonPayload(request): JsonPayload<SpeechRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio = controller.speech_service.synthesize(request).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_MPEG));
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(audio.len));

        // The guard rides along with the stream and deletes the file once
        // the body is finished or dropped.
        let guard = audio.guard;
        let stream = ReaderStream::new(audio.file).map(move |chunk| {
            let _guard = &guard;
            chunk
        });

        Ok((StatusCode::OK, headers, Body::from_stream(stream)))
    }
}
