pub mod create_branch_builder;
pub mod create_ruleset_builder;

use anyhow::Result;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}
