use super::*;
use std::io::{BufRead, Write};

/// Menu-driven front end over any line reader and writer.
///
/// The form values live here, the way input elements hold their text in a
/// page: edits prefill them and a submit only reads them.
pub struct TerminalView<R: BufRead, W: Write> {
    input: R,
    output: W,
    form: ContactDraft,
    submit_label: String,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            form: ContactDraft::default(),
            submit_label: ADD_LABEL.to_string(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn banner(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n--- Contact BOOK ---")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "1. {}", self.submit_label)?;
        writeln!(self.output, "2. Edit Contact")?;
        writeln!(self.output, "3. Delete Contact")?;
        writeln!(self.output, "4. Search Contacts")?;
        writeln!(self.output, "5. List Contacts")?;
        writeln!(self.output, "6. Exit")?;
        self.prompt("> ")
    }

    fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// One trimmed line, or `None` at end of input.
    fn get_input(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for one form field; a blank answer keeps the current value.
    fn read_field(&mut self, label: &str, current: &str) -> Result<Option<String>, AppError> {
        if current.is_empty() {
            self.prompt(&format!("{label}: "))?;
        } else {
            self.prompt(&format!("{label} [{current}]: "))?;
        }

        Ok(self.get_input()?.map(|value| {
            if value.is_empty() {
                current.to_string()
            } else {
                value
            }
        }))
    }

    fn fill_in_form(&mut self) -> Result<bool, AppError> {
        let current = self.form.clone();

        let Some(name) = self.read_field("Name", &current.name)? else {
            return Ok(false);
        };
        let Some(email) = self.read_field("Email", &current.email)? else {
            return Ok(false);
        };
        let Some(phone) = self.read_field("Phone", &current.phone)? else {
            return Ok(false);
        };

        self.form = ContactDraft { name, email, phone };
        Ok(true)
    }

    fn read_id(&mut self) -> Result<Option<Result<ContactId, AppError>>, AppError> {
        self.prompt("Contact id: ")?;
        Ok(self
            .get_input()?
            .map(|raw| raw.parse::<ContactId>().map_err(AppError::from)))
    }
}

impl<R: BufRead, W: Write> ContactView for TerminalView<R, W> {
    fn render_list(&mut self, contacts: &[&Contact]) -> Result<(), AppError> {
        writeln!(self.output)?;
        for contact in contacts {
            writeln!(self.output, "{contact}")?;
        }
        Ok(())
    }

    fn render_no_matches(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n{NO_MATCHES_TEXT}")?;
        Ok(())
    }

    fn render_count(&mut self, count: usize) -> Result<(), AppError> {
        writeln!(self.output, "Contacts: {count}")?;
        Ok(())
    }

    fn read_form_values(&self) -> ContactDraft {
        self.form.clone()
    }

    fn fill_form(&mut self, draft: &ContactDraft) -> Result<(), AppError> {
        self.form = draft.clone();
        writeln!(self.output, "\nEditing {}. Choose '1' to save.", draft.name)?;
        Ok(())
    }

    fn clear_form(&mut self) -> Result<(), AppError> {
        self.form = ContactDraft::default();
        Ok(())
    }

    fn set_submit_label(&mut self, label: &str) -> Result<(), AppError> {
        self.submit_label = label.to_string();
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> Result<bool, AppError> {
        writeln!(self.output, "\n{message} (y/n)")?;
        self.prompt("> ")?;

        let answer = self.get_input()?.unwrap_or_default().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    fn next_event(&mut self) -> Result<Option<UiEvent>, AppError> {
        loop {
            self.show_menu()?;

            let Some(action) = self.get_input()? else {
                return Ok(None);
            };

            match action.as_str() {
                "1" => {
                    if !self.fill_in_form()? {
                        return Ok(None);
                    }
                    return Ok(Some(UiEvent::Submit));
                }
                "2" | "3" => {
                    let id = match self.read_id()? {
                        None => return Ok(None),
                        Some(Ok(id)) => id,
                        Some(Err(err)) => {
                            writeln!(self.output, "{err}")?;
                            continue;
                        }
                    };
                    let row_action = if action == "2" {
                        RowAction::Edit(id)
                    } else {
                        RowAction::Delete(id)
                    };
                    return Ok(Some(UiEvent::RowAction(row_action)));
                }
                "4" => {
                    self.prompt("Search: ")?;
                    let Some(term) = self.get_input()? else {
                        return Ok(None);
                    };
                    return Ok(Some(UiEvent::SearchInput(term)));
                }
                "5" => return Ok(Some(UiEvent::ShowAll)),
                "6" => {
                    writeln!(self.output, "\nBye!")?;
                    return Ok(Some(UiEvent::Quit));
                }
                _ => {
                    writeln!(self.output, "{}", AppError::ParseCommand(action.clone()))?;
                }
            }
        }
    }
}
