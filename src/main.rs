//! terrain - classify quiz answers from the command line.
//!
//! Reads one JSON request on stdin and writes one JSON document on stdout.
//! Logs go to stderr.
//!
//! ```text
//! {"action": "questions", "goals": ["menstrual_comfort"]}
//! {"action": "preview", "responses": [{"question_id": "q1_temperature", "option_id": "cold"}]}
//! {"action": "onboard", "user_id": "u1", "goals": [], "responses": [...]}
//! {"action": "retake", "user_id": "u1", "responses": [...]}
//! {"action": "profile", "user_id": "u1"}
//! ```

use serde::Deserialize;
use serde_json::{json, Value};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::info;

use terrain::adapters::{
    BuiltinCatalogSource, FileCatalogSource, FsProfileRepository, InMemoryProfileRepository,
};
use terrain::application::{
    CompleteOnboardingCommand, CompleteOnboardingHandler, GetQuizQuestionsHandler,
    GetQuizQuestionsQuery, PreviewTerrainHandler, PreviewTerrainQuery, RetakeQuizCommand,
    RetakeQuizHandler,
};
use terrain::config::{AppConfig, ConfigError, LoggingConfig, StorageBackend};
use terrain::domain::foundation::{CommandMetadata, DomainError, ErrorCode, UserId};
use terrain::domain::quiz::{Catalog, GoalSet, Response};
use terrain::ports::{CatalogSource, ProfileRepository};

/// One CLI request.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Request {
    Questions {
        #[serde(default)]
        goals: GoalSet,
    },
    Preview {
        #[serde(default)]
        goals: GoalSet,
        #[serde(default)]
        responses: Vec<Response>,
    },
    Onboard {
        user_id: UserId,
        #[serde(default)]
        goals: GoalSet,
        responses: Vec<Response>,
    },
    Retake {
        user_id: UserId,
        #[serde(default)]
        goals: Option<GoalSet>,
        #[serde(default)]
        responses: Vec<Response>,
    },
    Profile {
        user_id: UserId,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

struct App {
    catalog: Arc<Catalog>,
    repository: Arc<dyn ProfileRepository>,
}

impl App {
    async fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let source: Box<dyn CatalogSource> = match &config.catalog.path {
            Some(path) => Box::new(FileCatalogSource::new(path)),
            None => Box::new(BuiltinCatalogSource),
        };
        let catalog = Arc::new(source.load().await?);

        let repository: Arc<dyn ProfileRepository> = match config.storage.backend {
            StorageBackend::File => Arc::new(FsProfileRepository::new(&config.storage.data_dir)),
            StorageBackend::Memory => Arc::new(InMemoryProfileRepository::new()),
        };

        info!(
            quiz_version = %catalog.version(),
            backend = ?config.storage.backend,
            "Terrain engine ready"
        );

        Ok(Self {
            catalog,
            repository,
        })
    }

    async fn dispatch(&self, request: Request) -> Result<Value, CliError> {
        let value = match request {
            Request::Questions { goals } => {
                let handler = GetQuizQuestionsHandler::new(self.catalog.clone());
                let result = handler
                    .handle(GetQuizQuestionsQuery { goals }, cli_metadata(None)?)
                    .await?;
                serde_json::to_value(result)?
            }
            Request::Preview { goals, responses } => {
                let handler = PreviewTerrainHandler::new(self.catalog.clone());
                let result = handler
                    .handle(PreviewTerrainQuery { goals, responses }, cli_metadata(None)?)
                    .await?;
                serde_json::to_value(result)?
            }
            Request::Onboard {
                user_id,
                goals,
                responses,
            } => {
                let handler =
                    CompleteOnboardingHandler::new(self.repository.clone(), self.catalog.clone());
                let metadata = cli_metadata(Some(&user_id))?;
                let cmd = CompleteOnboardingCommand {
                    user_id,
                    goals,
                    responses,
                };
                serde_json::to_value(handler.handle(cmd, metadata).await?)?
            }
            Request::Retake {
                user_id,
                goals,
                responses,
            } => {
                let handler = RetakeQuizHandler::new(self.repository.clone(), self.catalog.clone());
                let metadata = cli_metadata(Some(&user_id))?;
                let cmd = RetakeQuizCommand {
                    user_id,
                    goals,
                    responses,
                };
                let result = handler.handle(cmd, metadata).await?;
                let headline = result.shift.headline();
                let mut value = serde_json::to_value(result)?;
                value["headline"] = json!(headline);
                value
            }
            Request::Profile { user_id } => {
                let profile = self.repository.find_by_user(&user_id).await?.ok_or_else(|| {
                    DomainError::new(ErrorCode::ProfileNotFound, "Profile not found")
                })?;
                json!({
                    "needs_retake": profile.needs_retake(self.catalog.version()),
                    "profile": profile,
                })
            }
        };

        Ok(value)
    }
}

fn cli_metadata(user_id: Option<&UserId>) -> Result<CommandMetadata, DomainError> {
    let user_id = match user_id {
        Some(id) => id.clone(),
        None => UserId::new("cli")?,
    };
    Ok(CommandMetadata::new(user_id).with_source("cli"))
}

fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

async fn run() -> Result<Value, CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging)?;

    let app = App::from_config(&config).await?;

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let request: Request = serde_json::from_str(&input)?;

    app.dispatch(request).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(value) => {
            println!("{:#}", value);
            ExitCode::SUCCESS
        }
        Err(CliError::Domain(err)) => {
            let body = json!({
                "error": {
                    "code": err.code.to_string(),
                    "message": err.message(),
                    "details": err.details,
                }
            });
            println!("{:#}", body);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("terrain: {}", err);
            ExitCode::FAILURE
        }
    }
}
