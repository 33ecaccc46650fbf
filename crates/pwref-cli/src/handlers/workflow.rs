use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use pwref_catalog::Catalog;
use pwref_types::Protocol;

use crate::args::OutputFormat;
use crate::clipboard::ClipboardBridge;
use crate::presentation::table;

pub fn handle_list(catalog: &Catalog, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog.workflows)?),
        OutputFormat::Plain => print!(
            "{}",
            table::render_workflow_list(&catalog.workflows, std::io::stdout().is_terminal())
        ),
    }

    Ok(())
}

pub fn handle_show(
    catalog: &Catalog,
    id: &str,
    protocol: Protocol,
    copy: bool,
    format: &OutputFormat,
) -> Result<()> {
    let Some(workflow) = catalog.workflow(id) else {
        let ids: Vec<_> = catalog
            .workflows
            .iter()
            .map(|workflow| workflow.id.as_str())
            .collect();
        bail!("unknown workflow: {} (expected one of: {})", id, ids.join(", "));
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(workflow)?),
        OutputFormat::Plain => print!(
            "{}",
            table::render_workflow_detail(workflow, protocol, std::io::stdout().is_terminal())
        ),
    }

    if copy {
        // Clipboard trouble (headless host, denied access) must not fail
        // the command; the sample was already printed.
        let code = &workflow.sample(protocol).code;
        match ClipboardBridge::new().and_then(|mut bridge| bridge.copy_text(code)) {
            Ok(()) => eprintln!("Copied the {} sample to the clipboard.", protocol.label()),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    Ok(())
}
