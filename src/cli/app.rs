use super::Cli;
use anyhow::{Context, Result};
use entitygen::{GeneratorConfig, TemplateRenderer, render};
use log::LevelFilter;

pub struct App {
    config: GeneratorConfig,
    dump_model: bool,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let mut config = GeneratorConfig::new(cli.input)
            .template_name(&cli.template)
            .file_suffix(&cli.suffix)
            .file_extension(&cli.extension);
        if let Some(output) = cli.output {
            config = config.output_dir(output);
        }
        if let Some(dir) = cli.template_dir {
            config = config.template_dir(dir);
        }

        Self {
            config,
            dump_model: cli.dump_model,
        }
    }

    pub fn run(&self) -> Result<()> {
        let registry = entitygen::load_registry(&self.config.input).with_context(|| {
            format!("Failed to load model '{}'", self.config.input.display())
        })?;

        if self.dump_model {
            println!("{}", render::model_json(&registry)?);
            return Ok(());
        }

        let renderer = TemplateRenderer::from_config(&self.config)?;
        let written = render::render_all(&registry, &renderer, &self.config)
            .context("Generation aborted")?;

        for path in &written {
            println!("Generated {}", path.display());
        }
        Ok(())
    }
}

/// Install the logger; `RUST_LOG` takes precedence over `-v` flags
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
