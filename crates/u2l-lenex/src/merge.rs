//! Entry merging: fold generated athletes and relays back into the original
//! meet document.
//!
//! The original markup is streamed event-by-event into a fresh writer, so
//! sessions, events and meet metadata survive structurally untouched while
//! the output is re-indented uniformly. Exactly three subtrees change hands:
//! the CONSTRUCTOR block is replaced by this tool's stamp, HEATS schedules
//! are dropped, and the CLUBS roster is rebuilt from scratch.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::info;

use u2l_model::entry::{Athlete, Entry, EntryList, Relay};

use crate::error::Result;

/// Merge generated entries into a copy of the original document and return
/// the pretty-printed result.
pub fn merge_entries(original: &str, club_name: &str, entries: &EntryList) -> Result<String> {
    let mut reader = Reader::from_str(original);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut roster_written = false;
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"LENEX" => {
                    writer.write_event(Event::Start(versioned_root(&e)))?;
                    write_constructor(&mut writer)?;
                }
                b"CONSTRUCTOR" | b"HEATS" | b"CLUBS" => skip_subtree(&mut reader)?,
                _ => writer.write_event(Event::Start(e))?,
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"CONSTRUCTOR" | b"HEATS" | b"CLUBS" => {}
                _ => writer.write_event(Event::Empty(e))?,
            },
            Event::End(e) => {
                if e.name().as_ref() == b"MEET" && !roster_written {
                    write_clubs(&mut writer, club_name, entries)?;
                    roster_written = true;
                }
                writer.write_event(Event::End(e))?;
            }
            Event::Decl(_) | Event::DocType(_) => {}
            Event::Eof => break,
            other => writer.write_event(other)?,
        }
    }

    info!(
        athletes = entries.athletes.len(),
        relays = entries.relays.len(),
        entries = entries.entry_count(),
        "merged entries into meet document"
    );
    let mut output = String::from_utf8(writer.into_inner())?;
    output.push('\n');
    Ok(output)
}

/// Root element with its version attribute pinned, other attributes kept.
fn versioned_root(original: &BytesStart<'_>) -> BytesStart<'static> {
    let mut root = BytesStart::new("LENEX");
    for attribute in original.attributes().flatten() {
        if attribute.key.as_ref() != b"version" {
            root.push_attribute(attribute);
        }
    }
    root.push_attribute(("version", "3.0"));
    root
}

/// Fixed stamp identifying the conversion tool.
fn write_constructor(writer: &mut Writer<Vec<u8>>) -> Result<()> {
    let mut constructor = BytesStart::new("CONSTRUCTOR");
    constructor.push_attribute(("name", "uni2lenex"));
    constructor.push_attribute(("version", env!("CARGO_PKG_VERSION")));
    writer.write_event(Event::Start(constructor))?;
    let mut contact = BytesStart::new("CONTACT");
    contact.push_attribute(("name", "uni2lenex"));
    contact.push_attribute(("email", "entries@uni2lenex.invalid"));
    writer.write_event(Event::Empty(contact))?;
    writer.write_event(Event::End(BytesEnd::new("CONSTRUCTOR")))?;
    Ok(())
}

fn write_clubs(writer: &mut Writer<Vec<u8>>, club_name: &str, entries: &EntryList) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("CLUBS")))?;
    let mut club = BytesStart::new("CLUB");
    club.push_attribute(("name", club_name));
    writer.write_event(Event::Start(club))?;

    if !entries.athletes.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("ATHLETES")))?;
        for athlete in &entries.athletes {
            write_athlete(writer, athlete)?;
        }
        writer.write_event(Event::End(BytesEnd::new("ATHLETES")))?;
    }
    if !entries.relays.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("RELAYS")))?;
        for relay in &entries.relays {
            write_relay(writer, relay)?;
        }
        writer.write_event(Event::End(BytesEnd::new("RELAYS")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("CLUB")))?;
    writer.write_event(Event::End(BytesEnd::new("CLUBS")))?;
    Ok(())
}

fn write_athlete(writer: &mut Writer<Vec<u8>>, athlete: &Athlete) -> Result<()> {
    let mut node = BytesStart::new("ATHLETE");
    let id = athlete.id.to_string();
    node.push_attribute(("athleteid", id.as_str()));
    node.push_attribute(("lastname", athlete.last_name.as_str()));
    node.push_attribute(("firstname", athlete.first_name.as_str()));
    if let Some(gender) = athlete.gender {
        node.push_attribute(("gender", gender.as_str()));
    }
    if let Some(year) = athlete.birth_year {
        let birthdate = format!("{year}-01-01");
        node.push_attribute(("birthdate", birthdate.as_str()));
    }
    writer.write_event(Event::Start(node))?;

    if let Some(handicap) = &athlete.handicap {
        let mut node = BytesStart::new("HANDICAP");
        let level = handicap.level.to_string();
        node.push_attribute((handicap.attr, level.as_str()));
        writer.write_event(Event::Empty(node))?;
    }

    writer.write_event(Event::Start(BytesStart::new("ENTRIES")))?;
    for entry in &athlete.entries {
        write_entry(writer, entry)?;
    }
    writer.write_event(Event::End(BytesEnd::new("ENTRIES")))?;

    writer.write_event(Event::End(BytesEnd::new("ATHLETE")))?;
    Ok(())
}

fn write_relay(writer: &mut Writer<Vec<u8>>, relay: &Relay) -> Result<()> {
    let mut node = BytesStart::new("RELAY");
    let number = relay.number.to_string();
    node.push_attribute(("number", number.as_str()));
    node.push_attribute(("name", relay.name.as_str()));
    if let Some(gender) = relay.gender {
        node.push_attribute(("gender", gender.as_str()));
    }
    let age_max = relay.age_max.to_string();
    let total_min = relay.age_total_min.to_string();
    let total_max = relay.age_total_max.to_string();
    node.push_attribute(("agemin", "-1"));
    node.push_attribute(("agemax", age_max.as_str()));
    node.push_attribute(("agetotalmin", total_min.as_str()));
    node.push_attribute(("agetotalmax", total_max.as_str()));
    writer.write_event(Event::Start(node))?;

    writer.write_event(Event::Start(BytesStart::new("ENTRIES")))?;
    write_entry(writer, &relay.entry)?;
    writer.write_event(Event::End(BytesEnd::new("ENTRIES")))?;

    writer.write_event(Event::End(BytesEnd::new("RELAY")))?;
    Ok(())
}

fn write_entry(writer: &mut Writer<Vec<u8>>, entry: &Entry) -> Result<()> {
    let mut node = BytesStart::new("ENTRY");
    node.push_attribute(("eventid", entry.event_id.as_str()));
    if let Some(time) = &entry.time {
        node.push_attribute(("entrytime", time.as_str()));
    }
    if let Some(course) = entry.course {
        node.push_attribute(("entrycourse", course.as_str()));
    }

    if entry.meet_date.is_some() || entry.meet_place.is_some() {
        writer.write_event(Event::Start(node))?;
        let mut info = BytesStart::new("MEETINFO");
        if let Some(date) = &entry.meet_date {
            info.push_attribute(("date", date.as_str()));
        }
        if let Some(place) = &entry.meet_place {
            info.push_attribute(("city", place.as_str()));
        }
        writer.write_event(Event::Empty(info))?;
        writer.write_event(Event::End(BytesEnd::new("ENTRY")))?;
    } else {
        writer.write_event(Event::Empty(node))?;
    }
    Ok(())
}

/// Consume events until the subtree opened by the last Start event closes.
fn skip_subtree(reader: &mut Reader<&[u8]>) -> Result<()> {
    let mut depth = 1usize;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}
