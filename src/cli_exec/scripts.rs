use nexus3::scripts::{ScriptBridge, ScriptInvoker, ScriptRegistry};

use super::*;

pub(super) fn handle_script_command(
    ctx: &CliContext,
    command: ScriptCommands,
) -> Result<CliReturnCode> {
    let client = ctx.connect()?;

    match command {
        ScriptCommands::List { json } => {
            let scripts = client.list_scripts().context("list scripts")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&scripts).context("serialize scripts json")?
                );
            } else {
                for script in scripts {
                    println!("{} ({})", script.name, script.kind);
                }
            }
        }
        ScriptCommands::Create { name, file } => {
            let body = std::fs::read_to_string(&file)
                .with_context(|| format!("read {}", file.display()))?;
            let created = ScriptRegistry::new(&client)
                .ensure_installed(&name, &body)
                .with_context(|| format!("create script {}", name))?;
            if created {
                println!("Created script {}", name);
            } else {
                println!("Script {} already exists (left unchanged)", name);
            }
        }
        ScriptCommands::Run { name, payload } => {
            let resp = ScriptInvoker::new(&client)
                .run_raw(&name, &payload)
                .with_context(|| format!("run script {}", name))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&resp).context("serialize script response")?
            );
        }
        ScriptCommands::Delete { name } => {
            ScriptRegistry::new(&client)
                .force_delete(&name)
                .with_context(|| format!("delete script {}", name))?;
            println!("Deleted script {}", name);
        }
    }

    Ok(CliReturnCode::Success)
}
