use anyhow::Result;
use dairo_core::engineering::EngineerRequest;
use dairo_server::AppState;

pub async fn run(
    state: AppState,
    prompt: String,
    persona: Option<String>,
    no_explain: bool,
) -> Result<()> {
    let mut request = EngineerRequest::new(prompt);
    request.persona = persona;

    if no_explain {
        let response = state.service.engineer(request).await?;
        println!("{}", response.engineered_prompt);
        return Ok(());
    }

    let outcome = state.service.engineer_and_explain(request).await?;
    println!("## Engineered Prompt\n\n{}\n", outcome.engineered_prompt);
    println!("## Explanation\n\n{}", outcome.explanation);
    Ok(())
}
