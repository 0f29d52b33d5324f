//! Handler for `showCompany`.

use std::future::Future;
use std::pin::Pin;

use crate::state::{CompanyPreview, DeskContext};
use crate::tools::{InputSchema, ToolArguments, ToolContext, ToolHandler, ToolResult};

/// Opens a company profile. Unknown names get a synthetic record.
pub struct ShowCompanyHandler {
    desk: DeskContext,
}

impl ShowCompanyHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for ShowCompanyHandler {
    fn name(&self) -> &str {
        "showCompany"
    }

    fn description(&self) -> &str {
        "Show company profile preview"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().string("companyName", "Name of the company to show")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let name = args.str("companyName")?;
            let mut guard = self.desk.lock().await;
            let state = &mut *guard;

            let company = self
                .desk
                .directory()
                .find_or_synthesize(name, &mut state.generator);
            let sentences = state.article.sentences_mentioning(&company.name);
            tracing::debug!(
                company = %company.name,
                synthetic = company.synthetic,
                mentions = sentences.len(),
                "Company preview"
            );

            let reply = format!("Showing profile for {}", company.name);
            state.company_preview = Some(CompanyPreview { company, sentences });
            Ok(ToolResult::text(reply))
        })
    }
}
