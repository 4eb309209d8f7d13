use crate::{
    config::RuntimeConfiguration,
    data::{StudentRepo, student::PgStudentRepo},
    error::{MigrateSnafu, OpenDatabaseSnafu, RosterResult},
};
use snafu::ResultExt;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Clone)]
pub struct RosterState {
    repo: Arc<dyn StudentRepo>,
}

impl RosterState {
    pub async fn new(options: PgPoolOptions, config: RuntimeConfiguration) -> RosterResult<Self> {
        let pool = options
            .connect(&config.db_config().connection_url())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self {
            repo: Arc::new(PgStudentRepo::new(pool)),
        })
    }

    pub fn repo(&self) -> &dyn StudentRepo {
        self.repo.as_ref()
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            repo: Arc::new(crate::data::memory::MemoryStudentRepo::default()),
        }
    }
}
