/// The two path segments of a tag request, casing untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub image: String,
    pub version: String,
}
