//! `get-diff run`: compute the diff and publish the outputs.
//!
//! The run always publishes a full set of outputs. Events the diff is not
//! computed for, a missing checkout, and git failures all end in an empty
//! report (or the configured defaults) rather than an error.


use super::load_config;
use crate::cli::RunArgs;
use crate::config::Config;
use crate::context::resolve_workspace;
use crate::diff::{DiffPlan, DiffResult, resolve_diff};
use crate::error::{GetDiffError, Result};
use crate::event::{DiffInfo, EventContext};
use crate::git::{GitCli, Vcs};
use crate::output::{OutputSink, WorkflowCommands};
use crate::report::output_entries;
use tracing::info;

pub fn cmd_run(args: RunArgs) -> Result<()> {
    let config = load_config(&args.source)?;
    let classifier = config.classifier()?;
    let workspace = resolve_workspace(args.workspace, |key| std::env::var(key).ok())?;
    let event = EventContext::from_env()?;

    let diff_info = match (args.base, args.head) {
        (Some(base), Some(head)) => Some(DiffInfo::new(base, head)),
        (None, None) => None,
        _ => {
            return Err(GetDiffError::UserError(
                "--base and --head must be given together".to_string(),
            ));
        }
    };
    let skip = diff_info.is_none() && !event.is_target_event();

    let plan = DiffPlan {
        config: &config,
        classifier: &classifier,
        workspace: &workspace,
        event: &event,
        diff_info,
    };
    let vcs = GitCli::new(&workspace);
    let mut sink = WorkflowCommands::from_env();

    execute(&vcs, &mut sink, &plan, skip)?;
    Ok(())
}

/// Resolve the diff (unless `skip`) and publish diagnostics and outputs.
pub fn execute(
    vcs: &dyn Vcs,
    sink: &mut dyn OutputSink,
    plan: &DiffPlan<'_>,
    skip: bool,
) -> Result<Vec<DiffResult>> {
    let diffs = if skip {
        info!(event = %plan.event.event_name, "event is not a diff target; reporting empty result");
        Vec::new()
    } else {
        resolve_diff(vcs, sink, plan)
    };
    info!(files = diffs.len(), "diff resolved");

    dump_diffs(sink, &diffs)?;
    set_result(sink, &diffs, plan.config)?;
    Ok(diffs)
}

/// Dump the raw per-file records in a log group.
pub fn dump_diffs(sink: &mut dyn OutputSink, diffs: &[DiffResult]) -> Result<()> {
    let dump = serde_json::to_string_pretty(diffs)
        .map_err(|e| GetDiffError::OutputError(format!("failed to serialize diffs: {}", e)))?;

    sink.start_group("Dump diffs")?;
    sink.info(&dump)?;
    sink.end_group()
}

/// Publish every output (and its exported variable) in a log group.
pub fn set_result(sink: &mut dyn OutputSink, diffs: &[DiffResult], config: &Config) -> Result<()> {
    sink.start_group("Dump output")?;
    for entry in output_entries(diffs, config) {
        let name = entry.key.name();
        sink.set_output(name, &entry.value)?;
        if let Some(env_name) = &entry.env_name {
            sink.export_variable(env_name, &entry.value)?;
        }
        sink.info(&format!("\"{}: {}\"", name, entry.value))?;
    }
    sink.end_group()
}
