use pf_navigation::section::SectionId;

/// Parse a section identifier given on the command line.
pub fn valid_section(s: &str) -> Result<SectionId, String> {
    s.parse::<SectionId>().map_err(|e| e.to_string())
}
