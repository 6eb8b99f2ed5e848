use anyhow::{bail, Context};
use clap::{Args, Subcommand};
use portfolio_config::Config;
use portfolio_core_contact_contracts::{ContactFormFeatureService, ContactFormSubmitError};
use portfolio_models::contact::{ContactFormField, ContactFormInput, FormValidation};
use portfolio_ui::{bind, Renderer, TextRenderer};
use tracing::info;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Validate contact form input the way the page does when a field loses
    /// focus
    Validate {
        #[command(flatten)]
        input: InputArgs,
        /// Print the results as json
        #[arg(long)]
        json: bool,
    },
    /// Submit the contact form and render every state change
    Submit {
        #[command(flatten)]
        input: InputArgs,
        /// Exit right after the submission instead of waiting for the
        /// notification to expire
        #[arg(long)]
        no_wait: bool,
    },
}

#[derive(Debug, Args)]
pub struct InputArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl From<InputArgs> for ContactFormInput {
    fn from(value: InputArgs) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let service = environment::contact_form(&config.contact);
        let result = match self {
            ContactCommand::Validate { input, json } => {
                let validation = validate(&service, input.into());
                if json {
                    println!("{}", serde_json::to_string_pretty(&validation)?);
                } else {
                    print_validation(&validation);
                }
                if !validation.is_valid() {
                    bail!("The contact form contains invalid fields");
                }
                Ok(())
            }
            ContactCommand::Submit { input, no_wait } => {
                submit(&service, input.into(), !no_wait, TextRenderer::stdout()).await
            }
        };
        service.shutdown().await;
        result
    }
}

/// Validates every field separately, like three consecutive blur events.
fn validate(service: &impl ContactFormFeatureService, input: ContactFormInput) -> FormValidation {
    let [name, email, message] = ContactFormField::ALL
        .map(|field| service.validate_field(field, input.get(field).into()));
    FormValidation {
        name,
        email,
        message,
    }
}

fn print_validation(validation: &FormValidation) {
    for field in ContactFormField::ALL {
        match validation.get(field).error() {
            None => println!("{:<8} ok", field.label()),
            Some(err) => println!("{:<8} {err}", field.label()),
        }
    }
}

async fn submit(
    service: &impl ContactFormFeatureService,
    input: ContactFormInput,
    wait: bool,
    renderer: impl Renderer,
) -> anyhow::Result<()> {
    let mut receiver = service.subscribe();
    let binding = bind(receiver.clone(), renderer);

    let result = service.submit(input).await;

    if let (Ok(notification), true) = (&result, wait) {
        info!("Waiting for the notification to expire");
        receiver
            .wait_for(|state| {
                state.notification.as_ref().map(|x| x.id) != Some(notification.id)
            })
            .await
            .context("Contact form closed unexpectedly")?;
    }

    // give the binding a chance to render the final state
    tokio::task::yield_now().await;
    binding.unbind();

    match result {
        Ok(_) => Ok(()),
        Err(ContactFormSubmitError::Invalid(_)) => {
            bail!("The contact form contains invalid fields")
        }
        Err(err) => Err(err.into()),
    }
}
