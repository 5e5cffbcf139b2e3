use edspawn_core::{TemporaryEdit, edit_file};
use eyre::{OptionExt, bail, eyre};
use std::path::PathBuf;

pub struct EditArgs {
    file: Option<PathBuf>,
    line: Option<u32>,
}

impl EditArgs {
    pub fn parse(mut args: impl Iterator<Item = String>) -> eyre::Result<Self> {
        let mut file: Option<PathBuf> = None;
        let mut line: Option<u32> = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--line" | "-l" => {
                    let value = args.next().ok_or_eyre("missing value for line flag")?;
                    line = Some(
                        value
                            .parse()
                            .map_err(|_| eyre!("invalid line number: {}", value))?,
                    );
                }
                other => {
                    if other.starts_with('-') {
                        bail!("unknown flag: {}", other);
                    }
                    if file.is_some() {
                        bail!("unexpected argument: {}", other);
                    }
                    file = Some(PathBuf::from(other));
                }
            }
        }
        Ok(Self { file, line })
    }

    pub fn execute(&self) -> eyre::Result<()> {
        match &self.file {
            Some(file) => edit_file(file, self.line, None, None)?,
            None => {
                let mut session = TemporaryEdit::new().prefix("edspawn-");
                if let Some(line) = self.line {
                    session = session.line_number(line);
                }
                for line in session.edit()? {
                    println!("{line}");
                }
            }
        }
        Ok(())
    }
}
