//! Console lead form.
//!
//! Terminal stand-in for the browser form: prompts for name, email and
//! phone, submits through the state-tracked pipeline and shows the outcome.
//! Submissions are sequential, so only one is ever in flight.

use std::io::{self, BufRead, Write};

use lead_capture_api::api_client::ApiClient;
use lead_capture_api::config::ClientConfig;
use lead_capture_api::lead_client::LeadClient;
use lead_capture_api::models::Lead;
use lead_capture_api::submission::{LeadSubmission, SUCCESS_RESET_DELAY};

fn prompt(stdin: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut value = String::new();
    stdin.read_line(&mut value)?;
    Ok(value.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    let api = ApiClient::new(&config)?;
    let mut submission = LeadSubmission::new(LeadClient::new(api));

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Formulário de Lead");
    println!("Preencha os campos abaixo para entrarmos em contato.");

    loop {
        let lead = Lead {
            name: prompt(&mut input, "Nome completo")?,
            email: prompt(&mut input, "Email")?,
            phone: prompt(&mut input, "Telefone")?,
        };

        match submission.submit(&lead).await {
            Ok(_) => {
                println!("Lead criado com sucesso!");
                tokio::time::sleep(SUCCESS_RESET_DELAY).await;
                submission.reset();
            }
            Err(_) => {
                if let Some(message) = &submission.state().error {
                    println!("Erro: {}", message);
                }
                submission.reset();
            }
        }

        let again = prompt(&mut input, "Enviar outro lead? (s/n)")?;
        if !again.eq_ignore_ascii_case("s") {
            break;
        }
    }

    Ok(())
}
