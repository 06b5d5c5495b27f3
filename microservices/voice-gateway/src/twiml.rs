//! Call-control documents
//!
//! A [`VoiceResponse`] holds exactly one instruction for the telephony
//! platform and renders to the platform's `<Response>` XML.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use webcall_core::{Result, WebcallError};

/// Who a `<Dial>` rings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialTarget {
    /// PSTN number, rendered as `<Number>`
    Number(String),
    /// Registered software endpoint, rendered as `<Client>`
    Client(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    pub caller_id: Option<String>,
    pub target: DialTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceResponse {
    Dial(Dial),
    Say(String),
}

impl VoiceResponse {
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write(&mut writer, Event::Start(BytesStart::new("Response")))?;

        match self {
            VoiceResponse::Dial(dial) => {
                let mut elem = BytesStart::new("Dial");
                if let Some(caller_id) = &dial.caller_id {
                    elem.push_attribute(("callerId", caller_id.as_str()));
                }
                write(&mut writer, Event::Start(elem))?;

                let (noun, value) = match &dial.target {
                    DialTarget::Number(number) => ("Number", number),
                    DialTarget::Client(client) => ("Client", client),
                };
                write_text_element(&mut writer, noun, value)?;

                write(&mut writer, Event::End(BytesEnd::new("Dial")))?;
            }
            VoiceResponse::Say(text) => {
                write_text_element(&mut writer, "Say", text)?;
            }
        }

        write(&mut writer, Event::End(BytesEnd::new("Response")))?;

        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| WebcallError::Serialization(e.to_string()))
    }
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, name: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| WebcallError::Serialization(e.to_string()))
}
