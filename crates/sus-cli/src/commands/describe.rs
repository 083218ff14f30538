use crate::cli::GlobalFlags;
use crate::cli::root_commands::{DescribeAllArgs, DescribeArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `sus describe`.
pub async fn one(args: &DescribeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (service, model) = ctx
        .model_choice(args.service.clone(), args.model.clone())
        .await?;

    let progress = Progress::spinner(&format!("describing {} with {model}", args.suspect));
    let described = ctx
        .engine
        .generate_description(&args.suspect, &service, &model)
        .await;
    progress.finish_clear();

    output(&described?, flags.format)
}

/// Handle `sus describe-all`.
pub async fn all(
    args: &DescribeAllArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (service, model) = ctx
        .model_choice(args.service.clone(), args.model.clone())
        .await?;

    let progress = Progress::bar(0, &format!("{service}/{model}"));
    let report = ctx
        .engine
        .generate_descriptions_for_all(args.limit, &service, &model, |done, total| {
            progress.set_position(done as u64, total as u64);
        })
        .await?;
    progress.finish_ok(&format!(
        "{} described, {} failed",
        report.described.len(),
        report.failed.len()
    ));

    output(&report, flags.format)
}
