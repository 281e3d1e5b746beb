use anyhow::Result;
use std::sync::Arc;
use techtide_llm::{
    create_anthropic_chat, create_openai_chat, ChatClient, ClientFactory, ProviderSettings,
    ProviderType,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = ProviderSettings::from_env();

    println!("Chat Client Factory Example");
    println!("===========================\n");

    // Construction never fails and never touches the network
    let openai = create_openai_chat(&settings.openai, None);
    let anthropic = create_anthropic_chat(&settings.anthropic, Some("claude-3-5-haiku-latest"));
    println!("OpenAI handle:    {} ({})", openai.model(), openai.config().base_url());
    println!("Anthropic handle: {} ({})\n", anthropic.model(), anthropic.config().base_url());

    // Dynamic selection, e.g. from a config file
    let provider = match std::env::var("LLM_PROVIDER").as_deref() {
        Ok("anthropic") => ProviderType::Anthropic,
        _ => ProviderType::OpenAI,
    };
    let client: Arc<dyn ChatClient> = ClientFactory::create_chat_client(&settings.provider(provider), None);
    println!("Selected provider: {} -> {}", client.provider(), client.model());

    let has_key = match provider {
        ProviderType::OpenAI => settings.openai.api_key.is_some(),
        ProviderType::Anthropic => settings.anthropic.api_key.is_some(),
    };
    if !has_key {
        println!("Skipped request (no API key set for {})", provider);
        return Ok(());
    }

    let response = client.invoke("Say hello in five words.").await?;
    println!("Response: {}", response.content);
    if let Some(usage) = response.usage {
        println!("Tokens: {} in, {} out", usage.input_tokens, usage.output_tokens);
    }

    Ok(())
}
