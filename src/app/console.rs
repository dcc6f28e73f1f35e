use crate::core::factory::MusicFactory;
use crate::core::service::MusicService;
use crate::domain::model::{Kind, MusicEntity};
use crate::utils::error::{CatalogError, Result};
use std::io::{BufRead, Write};

/// Interactive menu over stdin/stdout. Thin glue: all validation happens in
/// the factory and all state lives in the service; this layer only prompts,
/// parses and renders. Factory and index errors are printed and the menu
/// continues, never the process aborting.
///
/// Generic over reader/writer so the whole loop is testable with string
/// buffers.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    factory: MusicFactory,
    service: MusicService,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W, service: MusicService) -> Self {
        Self {
            input,
            output,
            factory: MusicFactory::new(),
            service,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== Music Catalog ===")?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1 - Add entity")?;
            writeln!(self.output, "2 - List catalog")?;
            writeln!(self.output, "3 - Total duration")?;
            writeln!(self.output, "4 - Edit entity")?;
            writeln!(self.output, "5 - Remove entity")?;
            writeln!(self.output, "0 - Quit")?;

            let choice = self.read_text("Select an option: ")?;
            let outcome = match choice.trim() {
                "1" => self.add_entity(),
                "2" => self.list_catalog(),
                "3" => self.show_total_duration(),
                "4" => self.edit_entity(),
                "5" => self.remove_entity(),
                "0" => break,
                other => {
                    writeln!(self.output, "Unknown option: {}", other)?;
                    Ok(())
                }
            };

            // Validation and index errors are recoverable: report and loop.
            if let Err(e) = outcome {
                match e {
                    CatalogError::Io(io) => return Err(CatalogError::Io(io)),
                    recoverable => writeln!(self.output, "Rejected: {}", recoverable)?,
                }
            }
        }
        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    fn add_entity(&mut self) -> Result<()> {
        let entity = self.prompt_entity()?;
        self.service.add(entity);
        writeln!(self.output, "Added.")?;
        Ok(())
    }

    fn list_catalog(&mut self) -> Result<()> {
        let entities = self.service.list_all();
        if entities.is_empty() {
            writeln!(self.output, "Catalog is empty.")?;
            return Ok(());
        }
        for (i, entity) in entities.iter().enumerate() {
            writeln!(self.output, "{}. {}", i, entity)?;
        }
        Ok(())
    }

    fn show_total_duration(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Total duration: {} seconds",
            self.service.total_duration()
        )?;
        Ok(())
    }

    fn edit_entity(&mut self) -> Result<()> {
        let index = self.read_index("Index to edit: ")?;
        // Edit is reconstruct-and-replace: the old entity is displaced by a
        // freshly validated one, possibly of a different kind.
        let entity = self.prompt_entity()?;
        let displaced = self.service.replace_at(index, entity)?;
        writeln!(self.output, "Replaced: {}", displaced)?;
        Ok(())
    }

    fn remove_entity(&mut self) -> Result<()> {
        let index = self.read_index("Index to remove: ")?;
        let removed = self.service.remove_at(index)?;
        writeln!(self.output, "Removed: {}", removed)?;
        Ok(())
    }

    fn prompt_entity(&mut self) -> Result<MusicEntity> {
        let kind = self.read_kind()?;
        let name = self.read_text("Name: ")?;
        let artist = self.read_text("Artist: ")?;
        let year = self.read_i32("Year: ")?;

        match kind {
            Kind::Track => {
                let duration = self.read_u32("Duration (sec): ")?;
                let track_number = self.read_u32("Track number: ")?;
                let genre = self.read_text("Genre: ")?;
                self.factory
                    .create_track(&name, &artist, year, duration, track_number, &genre)
            }
            Kind::Single => {
                let duration = self.read_u32("Duration (sec): ")?;
                let track_number = self.read_u32("Track number: ")?;
                let genre = self.read_text("Genre: ")?;
                let version = self.read_text("Version (blank for Original): ")?;
                let is_remix = self.read_bool("Is remix (y/n): ")?;
                self.factory.create_single(
                    &name,
                    &artist,
                    year,
                    duration,
                    track_number,
                    &genre,
                    &version,
                    is_remix,
                )
            }
            Kind::Album => {
                let style = self.read_text("Style: ")?;
                let label = self.read_text("Label: ")?;
                self.factory.create_album(&name, &artist, year, &style, &label)
            }
            Kind::Collection => {
                let style = self.read_text("Style: ")?;
                let label = self.read_text("Label: ")?;
                let theme = self.read_text("Theme: ")?;
                let release_year = self.read_i32("Release year: ")?;
                self.factory.create_collection(
                    &name,
                    &artist,
                    year,
                    &style,
                    &label,
                    &theme,
                    release_year,
                )
            }
        }
    }

    fn read_kind(&mut self) -> Result<Kind> {
        loop {
            let raw =
                self.read_text("Type (track/single/album/collection, default track): ")?;
            match raw.trim().to_lowercase().as_str() {
                "" | "track" | "t" => return Ok(Kind::Track),
                "single" | "s" => return Ok(Kind::Single),
                "album" | "a" => return Ok(Kind::Album),
                "collection" | "c" => return Ok(Kind::Collection),
                other => writeln!(self.output, "Unknown type: {}", other)?,
            }
        }
    }

    fn read_text(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(CatalogError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_index(&mut self, prompt: &str) -> Result<usize> {
        loop {
            let raw = self.read_text(prompt)?;
            match raw.trim().parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Not an index: {}", raw)?,
            }
        }
    }

    fn read_i32(&mut self, prompt: &str) -> Result<i32> {
        loop {
            let raw = self.read_text(prompt)?;
            match raw.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Not a number: {}", raw)?,
            }
        }
    }

    fn read_u32(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let raw = self.read_text(prompt)?;
            match raw.trim().parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Not a non-negative number: {}", raw)?,
            }
        }
    }

    fn read_bool(&mut self, prompt: &str) -> Result<bool> {
        let raw = self.read_text(prompt)?;
        Ok(matches!(
            raw.trim().to_lowercase().as_str(),
            "y" | "yes" | "true" | "1"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::ConsoleLogger;
    use std::io::Cursor;

    fn run_script(script: &str) -> (MusicService, String) {
        let mut output = Vec::new();
        let service = MusicService::new(Box::new(ConsoleLogger::new()));
        let mut ui = ConsoleUi::new(Cursor::new(script.to_string()), &mut output, service);
        ui.run().unwrap();
        let service = ui.service;
        (service, String::from_utf8(output).unwrap())
    }

    #[test]
    fn add_track_then_quit() {
        let script = "1\ntrack\nSong One\nArtist A\n2020\n180\n1\nPop\n0\n";
        let (service, out) = run_script(script);
        assert_eq!(service.len(), 1);
        assert_eq!(service.total_duration(), 180);
        assert!(out.contains("Added."));
    }

    #[test]
    fn invalid_name_is_reported_and_loop_continues() {
        let script = "1\ntrack\n   \nArtist A\n2020\n180\n1\nPop\n0\n";
        let (service, out) = run_script(script);
        assert!(service.is_empty());
        assert!(out.contains("Rejected:"));
        assert!(out.contains("name"));
    }

    #[test]
    fn remove_out_of_range_is_recoverable() {
        let script = "5\n3\n0\n";
        let (service, out) = run_script(script);
        assert!(service.is_empty());
        assert!(out.contains("Rejected:"));
        assert!(out.contains("Bye."));
    }

    #[test]
    fn edit_replaces_with_new_kind() {
        let script = concat!(
            "1\ntrack\nSong\nArtist\n2020\n180\n1\nPop\n",
            "4\n0\nalbum\nGreat Album\nArtist\n2020\nPop Rock\nLabel\n",
            "0\n"
        );
        let (service, _) = run_script(script);
        assert_eq!(service.len(), 1);
        assert_eq!(service.list_all()[0].kind(), Kind::Album);
        assert_eq!(service.total_duration(), 0);
    }

    #[test]
    fn non_numeric_input_reprompts() {
        let script = "1\ntrack\nSong\nArtist\nabc\n2020\n180\n1\nPop\n0\n";
        let (service, out) = run_script(script);
        assert_eq!(service.len(), 1);
        assert!(out.contains("Not a number: abc"));
    }
}
