use anyhow::Result;

use techtide_agents::{
    config::Config, create_anthropic_chat, create_openai_chat, logging::init_logging, run_demo,
    ChatClient, ProviderSettings,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config.logging);

    // Handles are only constructed here; nothing is sent to either provider.
    let providers = ProviderSettings::from_env();
    let openai = create_openai_chat(&providers.openai, Some(config.llm.openai_model.as_str()));
    let anthropic = create_anthropic_chat(&providers.anthropic, Some(config.llm.anthropic_model.as_str()));

    tracing::info!(
        model = openai.model(),
        credentials = providers.openai.api_key.is_some(),
        "OpenAI chat handle ready"
    );
    tracing::info!(
        model = anthropic.model(),
        credentials = providers.anthropic.api_key.is_some(),
        "Anthropic chat handle ready"
    );

    let state = run_demo()?;
    println!("{}", serde_json::to_string(&state)?);

    Ok(())
}
