// Conversion prompt sent alongside every screenshot
// Author: kelexine (https://github.com/kelexine)

/// Instruction text for turning a flight screenshot into Sabre air segments.
///
/// All formatting knowledge lives here; the handler never inspects the
/// model's output beyond whitespace cleanup.
pub const SABRE_PROMPT: &str = r#"Convert the attached flight screenshot into Sabre GDS PNR air segment format.

Strict rules:
- Output plain text only.
- No explanations.
- No markdown.
- No code blocks.
- Format each flight segment as one line:

  SEG#  CARRIER  FLT#  CLASS  DATE  ORG DEST  DEPT ARR

Formatting rules:
- Use 24-hour time.
- Add +1 if arrival is next day.
- If 1 stop is shown, split into separate flight segments, one per leg.
- Do NOT invent connection cities, flights or times unless explicitly shown.
- If details are missing, use these placeholders:
    Unknown carrier = XX
    Unknown flight number = 0000
    Unknown date = 01JAN
    Unknown airport = XXX
    Unknown times = 0000 0000

Codeshare rules:
- If several airline codes are shown for one flight, the FIRST listed code is the marketing carrier.
- Use the marketing carrier code and its flight number for the segment line.
- Never replace the marketing carrier with the operating carrier.
- If an operating carrier is identifiable, add a line directly beneath that segment:
    OPERATED BY <full airline name>

Default class mapping:
    Economy = Y
    Premium Economy = W
    Business = J
    First = F
- If no cabin is shown, use Y.
"#;
