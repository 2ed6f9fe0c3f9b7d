//! XML rendering of a [`Background`] in the GNOME slideshow schema.

use std::io::{self, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::background::{Background, Entry, StartTime};
use crate::error::Error;

const INDENT: usize = 2;

/// Write `bg` as indented XML to `out`, followed by a trailing newline.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write<W: Write>(bg: &Background, out: W) -> Result<(), Error> {
    let mut w = Writer::new_with_indent(out, b' ', INDENT);
    open(&mut w, "background")?;
    start_time(&mut w, bg.start_time())?;
    for entry in bg.entries() {
        match entry {
            Entry::Static { duration, file } => {
                open(&mut w, "static")?;
                leaf(&mut w, "duration", &duration.to_string())?;
                leaf(&mut w, "file", &path_text(file))?;
                close(&mut w, "static")?;
            }
            Entry::Transition { duration, from, to } => {
                open(&mut w, "transition")?;
                leaf(&mut w, "duration", &duration.to_string())?;
                leaf(&mut w, "from", &path_text(from))?;
                leaf(&mut w, "to", &path_text(to))?;
                close(&mut w, "transition")?;
            }
        }
    }
    close(&mut w, "background")?;
    w.into_inner().write_all(b"\n")?;
    Ok(())
}

/// Render `bg` into a string.
///
/// # Errors
/// Returns an error if the XML writer fails.
pub fn to_string(bg: &Background) -> Result<String, Error> {
    let mut buf = Vec::new();
    write(bg, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn start_time<W: Write>(w: &mut Writer<W>, t: &StartTime) -> Result<(), Error> {
    open(w, "starttime")?;
    leaf(w, "year", &t.year.to_string())?;
    leaf(w, "month", &t.month.to_string())?;
    leaf(w, "day", &t.day.to_string())?;
    leaf(w, "hour", &t.hour.to_string())?;
    leaf(w, "minute", &t.minute.to_string())?;
    leaf(w, "second", &t.second.to_string())?;
    close(w, "starttime")
}

fn open<W: Write>(w: &mut Writer<W>, name: &str) -> Result<(), Error> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn close<W: Write>(w: &mut Writer<W>, name: &str) -> Result<(), Error> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn leaf<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> Result<(), Error> {
    open(w, name)?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    close(w, name)
}

// Non UTF-8 paths are written lossily.
fn path_text(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_start() -> StartTime {
        StartTime {
            year: 2012,
            month: 4,
            day: 19,
            hour: 7,
            minute: 30,
            second: 0,
        }
    }

    #[test]
    fn empty_background_has_only_starttime() {
        let bg = Background::starting_at(fixed_start());
        let xml = to_string(&bg).unwrap();
        assert_eq!(
            xml,
            "<background>\n  <starttime>\n    <year>2012</year>\n    <month>4</month>\n    \
             <day>19</day>\n    <hour>7</hour>\n    <minute>30</minute>\n    \
             <second>0</second>\n  </starttime>\n</background>\n"
        );
    }

    #[test]
    fn entries_render_in_order_with_indent() {
        let mut bg = Background::starting_at(fixed_start());
        bg.add_image("/p/a.jpg", 8);
        bg.add_transition("/p/a.jpg", "/p/b.png", 2).unwrap();
        let xml = to_string(&bg).unwrap();
        let body = xml.split("</starttime>\n").nth(1).unwrap();
        assert_eq!(
            body,
            "  <static>\n    <duration>8</duration>\n    <file>/p/a.jpg</file>\n  </static>\n  \
             <transition>\n    <duration>2</duration>\n    <from>/p/a.jpg</from>\n    \
             <to>/p/b.png</to>\n  </transition>\n</background>\n"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let mut bg = Background::starting_at(fixed_start());
        bg.add_image("/p/rock&roll<1>.jpg", 1);
        let xml = to_string(&bg).unwrap();
        assert!(xml.contains("<file>/p/rock&amp;roll&lt;1&gt;.jpg</file>"));
    }
}
