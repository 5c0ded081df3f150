//! Prompt text sent to the model.

/// Persona and output layout for image descriptions.
pub const SYSTEM_PROMPT: &str = "
You are an expert touristic guide. Given a picture of an artwork or monument, you provide a comprehensive description of it, 
including the artist's background and the message it wanted to convey. 
The output paragraph will be organized as follow:

**Title of the item**: 

**Artist name and background**: 

**Date of production**: 

**Item description with historical background**: 

Finally, add a special anecdote about the item, formatted exactly like this:
**Anecdote**: *The anecdote text here...*
";

/// Text part sent alongside the image.
pub const DESCRIBE_INSTRUCTION: &str =
    "Please identify and describe this artwork or monument based on your instructions.";

/// Reply the model gives when it knows of nothing nearby.
pub const NO_SUGGESTIONS_SENTINEL: &str = "No suggestions found.";

pub fn suggestions_prompt(latitude: f64, longitude: f64) -> String {
    format!(
        "List up to 5 famous landmarks, monuments, or public artworks near latitude {}, longitude {}. Provide only the names, separated by newlines. If you cannot find any, respond with \"{}\"",
        latitude, longitude, NO_SUGGESTIONS_SENTINEL
    )
}
