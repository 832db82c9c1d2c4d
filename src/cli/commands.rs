//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::{Path, PathBuf};
use tokio::io::AsyncRead;
use tracing::info;

use crate::core::client::DeeplClient;
use crate::core::config::ClientConfig;
use crate::core::errors::Result;
use crate::core::models::{Glossary, Translation, TranslationRequest};

/// Commands for the DeepL client
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate one or more texts
    Translate {
        /// Texts to translate, each becomes one result line
        #[arg(required = true)]
        text: Vec<String>,

        /// Target language code (e.g. DE, EN-US)
        #[arg(short, long)]
        target_lang: String,

        /// Source language (auto-detect if not specified)
        #[arg(long, default_value = "")]
        source_lang: String,

        /// Glossary to apply
        #[arg(long, default_value = "")]
        glossary_id: String,
    },

    /// List glossaries
    Glossaries {
        /// Print the response body as returned by the service
        #[arg(long)]
        raw: bool,
    },

    /// Create a glossary from a TSV file
    CreateGlossary {
        /// Glossary name
        #[arg(long)]
        name: String,

        /// Source language code
        #[arg(long)]
        source_lang: String,

        /// Target language code
        #[arg(long)]
        target_lang: String,

        /// TSV file with `source<TAB>target` lines, `-` for stdin
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Resolve client configuration from a file or the environment, then apply
/// command-line overrides.
pub fn load_config(
    config_path: Option<&Path>,
    api_key: Option<String>,
    base_url: Option<String>,
) -> Result<ClientConfig> {
    let mut config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ClientConfig::from_file(path)?
        }
        None => match &api_key {
            Some(key) => ClientConfig::from_env_with_api_key(key.as_str())?,
            None => ClientConfig::from_env()?,
        },
    };

    if let Some(key) = api_key {
        config.api_key = key;
    }
    if let Some(url) = base_url {
        config.base_url = url;
    }

    Ok(config)
}

/// Dispatch a parsed command
pub async fn run(client: &DeeplClient, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Translate {
            text,
            target_lang,
            source_lang,
            glossary_id,
        } => handle_translate(client, text, target_lang, source_lang, glossary_id).await,
        Commands::Glossaries { raw } => handle_glossaries(client, raw).await,
        Commands::CreateGlossary {
            name,
            source_lang,
            target_lang,
            file,
        } => handle_create_glossary(client, &name, &source_lang, &target_lang, &file).await,
    }
}

/// Handle translate command
pub async fn handle_translate(
    client: &DeeplClient,
    text: Vec<String>,
    target_lang: String,
    source_lang: String,
    glossary_id: String,
) -> anyhow::Result<()> {
    let request = TranslationRequest::new(text, target_lang)
        .with_source_lang(source_lang)
        .with_glossary_id(glossary_id);

    info!("Translating {} text(s) to {}", request.texts.len(), request.target_lang);
    let translations = client.translate(&request).await?;

    print!("{}", format_translations(&translations));
    Ok(())
}

/// Handle glossaries command
pub async fn handle_glossaries(client: &DeeplClient, raw: bool) -> anyhow::Result<()> {
    if raw {
        println!("{}", client.list_glossaries().await?);
        return Ok(());
    }

    let glossaries = client.glossaries().await?;
    if glossaries.is_empty() {
        println!("No glossaries found");
        return Ok(());
    }

    print!("{}", format_glossaries(&glossaries));
    Ok(())
}

/// Handle create-glossary command
pub async fn handle_create_glossary(
    client: &DeeplClient,
    name: &str,
    source_lang: &str,
    target_lang: &str,
    file: &Path,
) -> anyhow::Result<()> {
    let glossary = create_glossary_from_path(client, name, source_lang, target_lang, file).await?;

    println!("{}", serde_json::to_string_pretty(&glossary)?);
    Ok(())
}

/// Create a glossary reading entries from `file`, or stdin when it is `-`
pub async fn create_glossary_from_path(
    client: &DeeplClient,
    name: &str,
    source_lang: &str,
    target_lang: &str,
    file: &Path,
) -> Result<Glossary> {
    if file == Path::new("-") {
        info!("Reading glossary entries from stdin");
        return create_glossary_from_stdin(client, name, source_lang, target_lang, tokio::io::stdin())
            .await;
    }

    info!("Reading glossary entries from {}", file.display());
    let entries = tokio::fs::File::open(file).await?;
    client
        .create_glossary(name, source_lang, target_lang, entries)
        .await
}

/// Create a glossary from the process's standard input, or any stand-in reader
pub async fn create_glossary_from_stdin<R>(
    client: &DeeplClient,
    name: &str,
    source_lang: &str,
    target_lang: &str,
    stdin: R,
) -> Result<Glossary>
where
    R: AsyncRead + Unpin,
{
    client
        .create_glossary(name, source_lang, target_lang, stdin)
        .await
}

/// One line per translation: `[<detected>] <text>`
pub fn format_translations(translations: &[Translation]) -> String {
    translations
        .iter()
        .map(|t| format!("[{}] {}\n", t.detected_source_language, t.text))
        .collect()
}

/// One tab-separated line per glossary
pub fn format_glossaries(glossaries: &[Glossary]) -> String {
    glossaries
        .iter()
        .map(|g| {
            format!(
                "{}\t{}\t{}->{}\t{} entries\t{}\n",
                g.id,
                g.name,
                g.source_lang,
                g.target_lang,
                g.entry_count,
                if g.ready { "ready" } else { "pending" }
            )
        })
        .collect()
}
