//! Call Router
//!
//! Decides which call-control document answers a voice webhook:
//! 1. destination equals the configured caller id: ring the most recent
//!    browser identity
//! 2. any other destination: dial it as a number or a named client
//! 3. no destination: play the greeting

use regex::Regex;
use webcall_core::{Result, WebcallError};

use crate::twiml::{Dial, DialTarget, VoiceResponse};

pub const GREETING: &str = "Thanks for calling!";

/// Digits and dialing punctuation only. Matches the empty string.
const PHONE_NUMBER_PATTERN: &str = r"^[0-9+\-() ]*$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKind {
    PhoneNumber,
    Client,
}

#[derive(Debug, Clone)]
pub struct CallRouter {
    caller_id: String,
    phone_number_pattern: Regex,
}

impl CallRouter {
    pub fn new(caller_id: &str) -> Result<Self> {
        Ok(Self {
            caller_id: caller_id.to_string(),
            phone_number_pattern: Regex::new(PHONE_NUMBER_PATTERN)
                .map_err(|e| WebcallError::Internal(e.to_string()))?,
        })
    }

    pub fn caller_id(&self) -> &str {
        &self.caller_id
    }

    pub fn classify(&self, destination: &str) -> DestinationKind {
        if self.phone_number_pattern.is_match(destination) {
            DestinationKind::PhoneNumber
        } else {
            DestinationKind::Client
        }
    }

    pub fn route_call(&self, destination: Option<&str>, last_identity: &str) -> VoiceResponse {
        match destination {
            Some(to) if to == self.caller_id => {
                tracing::debug!(identity = %last_identity, "Routing inbound call to browser client");
                VoiceResponse::Dial(Dial {
                    caller_id: None,
                    target: DialTarget::Client(last_identity.to_string()),
                })
            }
            Some(to) => {
                let target = match self.classify(to) {
                    DestinationKind::PhoneNumber => DialTarget::Number(to.to_string()),
                    DestinationKind::Client => DialTarget::Client(to.to_string()),
                };
                tracing::debug!(destination = %to, dial_target = ?target, "Routing outbound call");
                VoiceResponse::Dial(Dial {
                    caller_id: Some(self.caller_id.clone()),
                    target,
                })
            }
            None => VoiceResponse::Say(GREETING.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CALLER_ID: &str = "+15550001111";

    fn router() -> CallRouter {
        CallRouter::new(CALLER_ID).unwrap()
    }

    #[test]
    fn test_phone_number_like_destinations() {
        let router = router();
        for to in ["555-1234", "+1 (555) 000-1111", "0", "+", "   ", "()-+"] {
            assert_eq!(router.classify(to), DestinationKind::PhoneNumber, "{}", to);
        }
    }

    #[test]
    fn test_empty_destination_is_phone_number_like() {
        let router = router();
        assert_eq!(router.classify(""), DestinationKind::PhoneNumber);
        assert_eq!(
            router.route_call(Some(""), "Alice94103"),
            VoiceResponse::Dial(Dial {
                caller_id: Some(CALLER_ID.to_string()),
                target: DialTarget::Number(String::new()),
            })
        );
    }

    #[test]
    fn test_client_destinations() {
        let router = router();
        for to in ["alice", "Alice94103", "555-1234x", "client:bob", "555.1234", "\u{0663}\u{0664}"] {
            assert_eq!(router.classify(to), DestinationKind::Client, "{}", to);
        }
    }

    #[test]
    fn test_no_destination_says_greeting() {
        let router = router();
        for identity in ["", "Alice94103", CALLER_ID] {
            assert_eq!(
                router.route_call(None, identity),
                VoiceResponse::Say(GREETING.to_string())
            );
        }
    }

    #[test]
    fn test_caller_id_destination_rings_last_identity() {
        assert_eq!(
            router().route_call(Some(CALLER_ID), "Liam31415"),
            VoiceResponse::Dial(Dial {
                caller_id: None,
                target: DialTarget::Client("Liam31415".to_string()),
            })
        );
    }

    #[test]
    fn test_caller_id_comparison_is_by_value() {
        let destination = String::from("+1555") + "0001111";
        let response = router().route_call(Some(destination.as_str()), "Liam31415");
        assert!(matches!(
            response,
            VoiceResponse::Dial(Dial { caller_id: None, target: DialTarget::Client(ref id) }) if id == "Liam31415"
        ));
    }

    #[test]
    fn test_number_destination() {
        assert_eq!(
            router().route_call(Some("555-1234"), "Liam31415"),
            VoiceResponse::Dial(Dial {
                caller_id: Some(CALLER_ID.to_string()),
                target: DialTarget::Number("555-1234".to_string()),
            })
        );
    }

    #[test]
    fn test_client_destination() {
        assert_eq!(
            router().route_call(Some("Olivia27182"), "Liam31415"),
            VoiceResponse::Dial(Dial {
                caller_id: Some(CALLER_ID.to_string()),
                target: DialTarget::Client("Olivia27182".to_string()),
            })
        );
    }

    fn is_dial_char(c: char) -> bool {
        c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ')
    }

    proptest! {
        #[test]
        fn dial_characters_only_classify_as_phone_number(to in "[0-9+\\-() ]{0,24}") {
            let router = router();
            prop_assert_eq!(router.classify(&to), DestinationKind::PhoneNumber);

            prop_assume!(to != CALLER_ID);
            prop_assert_eq!(
                router.route_call(Some(to.as_str()), "Liam31415"),
                VoiceResponse::Dial(Dial {
                    caller_id: Some(CALLER_ID.to_string()),
                    target: DialTarget::Number(to.clone()),
                })
            );
        }

        #[test]
        fn any_other_character_classifies_as_client(
            prefix in "[0-9+\\-() ]{0,12}",
            other in any::<char>().prop_filter("outside the dial set", |c| !is_dial_char(*c)),
            suffix in "\\PC{0,12}",
        ) {
            let to = format!("{}{}{}", prefix, other, suffix);
            let router = router();
            prop_assert_eq!(router.classify(&to), DestinationKind::Client);
            prop_assert_eq!(
                router.route_call(Some(to.as_str()), "Liam31415"),
                VoiceResponse::Dial(Dial {
                    caller_id: Some(CALLER_ID.to_string()),
                    target: DialTarget::Client(to.clone()),
                })
            );
        }

        #[test]
        fn no_destination_ignores_identity(identity in "\\PC{0,24}") {
            prop_assert_eq!(
                router().route_call(None, &identity),
                VoiceResponse::Say(GREETING.to_string())
            );
        }
    }
}
