use serde_json::Error as JsonError;

use crate::messages::A2uiMessage;

/// Decode the body of an example block into typed messages.
pub fn decode_example_messages(body: &str) -> Result<Vec<A2uiMessage>, JsonError> {
    serde_json::from_str(body)
}

/// Encode a message sequence as a delimited example block: a pretty-printed
/// JSON array between `---BEGIN <name>---` / `---END <name>---` markers.
pub fn encode_example_block(name: &str, messages: &[A2uiMessage]) -> Result<String, JsonError> {
    let body = serde_json::to_string_pretty(messages)?;
    Ok(format!("---BEGIN {name}---\n{body}\n---END {name}---\n"))
}

/// Encode several named message sequences as one blob, blocks separated by a
/// blank line.
pub fn encode_example_blocks<'a, I>(blocks: I) -> Result<String, JsonError>
where
    I: IntoIterator<Item = (&'a str, &'a [A2uiMessage])>,
{
    let mut output = String::new();
    for (name, messages) in blocks {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&encode_example_block(name, messages)?);
    }
    Ok(output)
}
