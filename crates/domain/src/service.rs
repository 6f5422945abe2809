use log::{debug, error};

use crate::{Exercise, FetchError, SearchQuery};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self, query: &SearchQuery) -> Result<Vec<Exercise>, FetchError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self, query: &SearchQuery) -> Result<Vec<Exercise>, FetchError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                FetchError::TransportFailure(_) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self, query: &SearchQuery) -> Result<Vec<Exercise>, FetchError> {
        log_on_error!(
            self.repository.read_exercises(query),
            "get",
            "exercises"
        )
    }
}
