pub mod errors;

use std::time::Duration;
use ureq::Agent;
use crate::manager_ntfy::errors::NtfyError;

const REQUEST_DOMAIN: &str = "https://ntfy.sh";

/// Struct for publishing messages through the ntfy push relay.
///
/// The relay forwards each published message as an email to the address
/// given in the X-Email header, so delivery is one publish per recipient.
pub struct Ntfy {
    agent: Agent,
    topic: String,
}

impl Ntfy {
    /// Returns a new instance of the Ntfy struct
    ///
    /// # Arguments
    ///
    /// * 'topic' - the ntfy topic to publish on
    pub fn new(topic: &str) -> Ntfy {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();

        let agent = config.into();

        Self { agent, topic: topic.to_string() }
    }

    /// Publishes one message addressed to one recipient
    ///
    /// # Arguments
    ///
    /// * 'recipient' - email address the relay shall forward the message to
    /// * 'title' - the message title
    /// * 'body' - the message body
    pub fn publish(&self, recipient: &str, title: &str, body: &str) -> Result<(), NtfyError> {
        let url = format!("{}/{}", REQUEST_DOMAIN, self.topic);

        let _ = self.agent
            .post(url)
            .header("Title", title)
            .header("X-Email", recipient)
            .send(body)?;

        Ok(())
    }
}
