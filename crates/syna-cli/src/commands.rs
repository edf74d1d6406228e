//! Handlers for each subcommand.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::Path;
use syna_core::{ProcessingMode, SynaConfig, TaskProfile};
use syna_engine::{EnhancedSyna, ThoughtOutput};
use syna_network::{Activation, BilateralNetwork};
use tokio::io::AsyncReadExt;

/// Resolves a text argument, reading stdin for `-`.
pub async fn read_text(text: &str) -> Result<String> {
    if text != "-" {
        return Ok(text.to_string());
    }
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("Failed to read stdin")?;
    Ok(buffer)
}

pub async fn process(
    config: &SynaConfig,
    text: &str,
    mode: Option<ProcessingMode>,
    json: bool,
) -> Result<()> {
    let syna = EnhancedSyna::new(config)?;
    let output = match mode {
        Some(mode) => syna.process_with_mode(text, mode).await?,
        None => syna.process_input(text).await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_output(&output));
    }
    Ok(())
}

pub fn profile(config: &SynaConfig, text: &str, json: bool) -> Result<()> {
    #[derive(Serialize)]
    struct ProfileReport {
        profile: TaskProfile,
        mode: ProcessingMode,
    }

    let syna = EnhancedSyna::new(config)?;
    let (profile, mode) = syna.analyze(text)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ProfileReport { profile, mode })?
        );
    } else {
        println!("complexity:  {:.3}", profile.complexity);
        println!("creativity:  {:.3}", profile.creativity_required);
        println!("analysis:    {:.3}", profile.analysis_required);
        println!("mode:        {mode}");
    }
    Ok(())
}

pub fn network(
    config: &SynaConfig,
    creative: &[f64],
    analytical: &[f64],
    steps: usize,
    json: bool,
) -> Result<()> {
    #[derive(Serialize)]
    struct NetworkReport {
        outputs: Vec<Vec<f64>>,
        activations: Vec<Vec<Activation>>,
    }

    if creative.len() != analytical.len() {
        bail!(
            "--creative has {} values but --analytical has {}",
            creative.len(),
            analytical.len()
        );
    }

    let mut network_config = config.network.clone();
    network_config.size = creative.len();
    let mut net = BilateralNetwork::new(&network_config)?;

    let outputs = (0..steps)
        .map(|_| net.process_parallel(creative, analytical))
        .collect::<syna_core::Result<Vec<_>>>()?;
    let activations = net
        .synapses()
        .iter()
        .map(|s| s.activation_pattern().copied().collect())
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&NetworkReport {
                outputs,
                activations
            })?
        );
    } else {
        for (step, row) in outputs.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:.3}")).collect();
            println!("step {}: [{}]", step + 1, cells.join(", "));
        }
        let integrated: usize = net.synapses().iter().map(|s| s.integrated_count()).sum();
        println!("integrated firings: {integrated}");
    }
    Ok(())
}

pub fn config_show(config: &SynaConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

pub fn config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, SynaConfig::default().to_toml_string()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created config file at {}", path.display());
    Ok(())
}

fn render_output(output: &ThoughtOutput) -> String {
    let result = &output.result;
    let mut text = format!(
        "thought:     {}\nmode:        {}\nconfidence:  {:.3}\nnovelty:     {:.3}\nusage:       {:.1}\npath:        {}\ninsights:\n",
        output.metadata.thought_id,
        output.mode,
        result.confidence,
        result.novelty_score,
        result.resource_usage,
        result.processing_path.join(" > "),
    );
    for insight in &result.insights {
        text.push_str(&format!("  - {insight}\n"));
    }
    text
}
