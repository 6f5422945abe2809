//! REST
//!
//! Client of the remote exercise API. Requests are plain values, so building a request and
//! interpreting a response can be tested without a browser. Only [`GlooNetSendRequest`] performs
//! actual I/O.

use log::{debug, error};
use serde::{Deserialize, Serialize};
use stort_domain as domain;
use stort_web_app::Settings;

pub const EXERCISES_PATH: &str = "/v1/exercises";
pub const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub api_key: String,
}

impl From<&Settings> for Endpoint {
    fn from(value: &Settings) -> Self {
        Self {
            base_url: value.base_url.clone(),
            api_key: value.api_key.clone(),
        }
    }
}

impl Endpoint {
    pub fn exercises_url(&self) -> Result<String, domain::FetchError> {
        let base_url = self.base_url.trim().trim_end_matches('/');
        let host = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
            .ok_or_else(|| domain::FetchError::InvalidEndpoint(self.base_url.clone()))?;

        if host.is_empty() || host.contains(['?', '#', ' ']) {
            return Err(domain::FetchError::InvalidEndpoint(self.base_url.clone()));
        }

        Ok(format!("{base_url}{EXERCISES_PATH}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub parameters: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, domain::FetchError>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, domain::FetchError> {
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);
        let mut builder = gloo_net::http::Request::get(&request.url)
            .query(
                request
                    .parameters
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            )
            .abort_signal(signal.as_ref());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        // Dropping the future before completion cancels the browser request.
        let mut guard = AbortOnDrop(controller);
        let response = builder
            .send()
            .await
            .map_err(|err| domain::FetchError::TransportFailure(err.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|err| domain::FetchError::TransportFailure(err.to_string()))?;
        guard.0 = None;

        Ok(Response {
            status: response.status(),
            status_text: response.status_text(),
            body,
        })
    }
}

struct AbortOnDrop(Option<web_sys::AbortController>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = &self.0 {
            controller.abort();
        }
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    endpoint: Endpoint,
    sender: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_sender(endpoint, GlooNetSendRequest)
    }
}

impl<S: SendRequest> REST<S> {
    pub fn with_sender(endpoint: Endpoint, sender: S) -> Self {
        Self { endpoint, sender }
    }

    pub fn request(&self, query: &domain::SearchQuery) -> Result<Request, domain::FetchError> {
        Ok(Request {
            url: self.endpoint.exercises_url()?,
            parameters: query
                .parameters()
                .into_iter()
                .map(|(parameter, value)| (parameter.as_ref().to_string(), value.to_string()))
                .collect(),
            headers: vec![(API_KEY_HEADER.to_string(), self.endpoint.api_key.clone())],
        })
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_exercises(
        &self,
        query: &domain::SearchQuery,
    ) -> Result<Vec<domain::Exercise>, domain::FetchError> {
        let request = self.request(query)?;
        debug!("GET {} {query}", request.url);
        let response = self.sender.send_request(request).await?;
        if !response.ok() {
            error!(
                "exercise API responded with {} {}",
                response.status, response.status_text
            );
        }
        parse_exercises(&response)
    }
}

pub fn parse_exercises(response: &Response) -> Result<Vec<domain::Exercise>, domain::FetchError> {
    if !response.ok() {
        return Err(domain::FetchError::TransportFailure(format!(
            "{} {}",
            response.status, response.status_text
        )));
    }

    if response.body.trim().is_empty() {
        return Err(domain::FetchError::EmptyResponseBody);
    }

    let exercises = serde_json::from_str::<Vec<Exercise>>(&response.body)
        .map_err(|err| domain::FetchError::MalformedResponseBody(err.to_string()))?;

    Ok(exercises.into_iter().map(domain::Exercise::from).collect())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
    pub muscle: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        domain::Exercise {
            name: value.name,
            exercise_type: value.exercise_type,
            muscle: value.muscle,
            equipment: value.equipment,
            difficulty: value.difficulty,
            instructions: value.instructions,
        }
    }
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Exercise {
            name: value.name,
            exercise_type: value.exercise_type,
            muscle: value.muscle,
            equipment: value.equipment,
            difficulty: value.difficulty,
            instructions: value.instructions,
        }
    }
}
