//! Streaming catalog reader for Lenex meet documents.
//!
//! Walks sessions and events in document order. Missing optional attributes
//! fall back to empty strings or numeric defaults; the reader only rejects a
//! document that is not well-formed XML or has no MEET element.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info};

use u2l_model::catalog::{AgeGroup, LenexEvent, MeetCatalog, Session};

use crate::error::{LenexError, Result};

/// Read the session/event tree out of a meet document.
pub fn read_meet(xml: &str) -> Result<MeetCatalog> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut catalog = MeetCatalog::default();
    let mut saw_meet = false;
    let mut session: Option<Session> = None;
    let mut event: Option<LenexEvent> = None;
    let mut generated_ids = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"MEET" => saw_meet = true,
                b"SESSION" => {
                    session = Some(Session {
                        date: attr(&e, b"date"),
                        name: attr(&e, b"name"),
                        events: Vec::new(),
                    });
                }
                b"EVENT" => {
                    let mut id = attr(&e, b"eventid");
                    if id.is_empty() {
                        generated_ids += 1;
                        id = format!("GEN{generated_ids}");
                    }
                    event = Some(LenexEvent {
                        id,
                        number: attr(&e, b"number").parse().unwrap_or(0),
                        gender: attr(&e, b"gender"),
                        round: attr(&e, b"round"),
                        stroke: String::new(),
                        relay_count: 1,
                        distance: 0,
                        session_date: session
                            .as_ref()
                            .map(|s| s.date.clone())
                            .unwrap_or_default(),
                        age_groups: Vec::new(),
                    });
                }
                b"SWIMSTYLE" => {
                    if let Some(event) = event.as_mut() {
                        event.stroke = attr(&e, b"stroke");
                        event.relay_count = attr(&e, b"relaycount").parse().unwrap_or(1);
                        event.distance = attr(&e, b"distance").parse().unwrap_or(0);
                    }
                }
                b"AGEGROUP" => {
                    if let Some(event) = event.as_mut() {
                        // agemin/agemax default to 0 when absent; a source
                        // value of -1 (unbounded) passes through verbatim.
                        event.age_groups.push(AgeGroup {
                            id: attr(&e, b"agegroupid"),
                            min: attr(&e, b"agemin").parse().unwrap_or(0),
                            max: attr(&e, b"agemax").parse().unwrap_or(0),
                            name: attr(&e, b"name"),
                        });
                    }
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"EVENT" => {
                    if let (Some(session), Some(event)) = (session.as_mut(), event.take()) {
                        debug!(
                            number = event.number,
                            round = %event.round,
                            "read event"
                        );
                        session.events.push(event);
                        catalog.event_count += 1;
                    }
                }
                b"SESSION" => {
                    if let Some(session) = session.take() {
                        catalog.sessions.push(session);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_meet {
        return Err(LenexError::MissingMeet);
    }
    info!(
        sessions = catalog.sessions.len(),
        events = catalog.event_count,
        "read meet catalog"
    );
    Ok(catalog)
}

/// Attribute value as owned text, empty when absent.
fn attr(element: &BytesStart<'_>, name: &[u8]) -> String {
    element
        .attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .map(|a| {
            a.unescape_value()
                .map(Cow::into_owned)
                .unwrap_or_else(|_| String::from_utf8_lossy(&a.value).into_owned())
        })
        .unwrap_or_default()
}
