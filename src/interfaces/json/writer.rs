use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes values as pretty-printed JSON, one document per call.
pub struct JsonWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.sink, value)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_writer_appends_newline() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write(&json!({"merchantSessionKey": null}))
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("}\n"));
        assert!(output.contains("\"merchantSessionKey\": null"));
    }
}
