use testgen_core::models::GenerateTestcaseRequest;
use testgen_core::session::ValidationWarning;
use testgen_core::upload::UploadPolicy;

use super::{Context, emit};
use crate::Result;
use crate::cli::{OutputArgs, TestcaseArgs};

/// Generate a test case from requirements text.
pub async fn run(ctx: &Context, args: TestcaseArgs) -> Result<()> {
    let requirements = match (args.requirements, &args.requirements_file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };
    if requirements.trim().is_empty() {
        return Err(ValidationWarning::MissingField("requirements").into());
    }

    let openapi_spec = match &args.spec {
        Some(path) => Some(UploadPolicy::default().load(path).await?.content),
        None => None,
    };

    let request = GenerateTestcaseRequest {
        test_type: args.test_type,
        requirements_text: Some(requirements),
        openapi_spec,
        priority: args.priority,
    };
    generate(ctx, &request, &args.output).await
}

pub async fn generate(
    ctx: &Context,
    request: &GenerateTestcaseRequest,
    output: &OutputArgs,
) -> Result<()> {
    log::info!("Generating {} test case", request.test_type.as_str());
    let client = ctx.client()?;
    let resp = client.generate_testcase(request).await?;
    emit(&resp.code, output)
}
