/* Copyright (C) 2018 Olivier Goffart <ogoffart@woboq.com>

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the "Software"), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT
NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES
OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
*/

/// Fields of the catalog header, the translation of the empty message.
///
/// ```
/// let metadata = motr::Metadata::from_header(
///     "Content-Type: text/plain; charset=UTF-8\nPlural-Forms: nplurals=2; plural=(n != 1);\n",
/// );
/// assert_eq!(metadata.charset(), Some("UTF-8"));
/// assert_eq!(metadata.nplurals(), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: Vec<(String, String)>,
}

impl Metadata {
    /// Parses `Name: value` lines. Lines without a colon are ignored.
    pub fn from_header(header: &str) -> Self {
        let fields = header
            .lines()
            .filter_map(|line| {
                let (name, value) = line.split_once(':')?;
                Some((name.trim().to_owned(), value.trim().to_owned()))
            })
            .collect();
        Self { fields }
    }

    /// Value of the field `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The `charset` parameter of `Content-Type`.
    pub fn charset(&self) -> Option<&str> {
        self.parameter("Content-Type", "charset")
    }

    /// The raw `Plural-Forms` field. It is informational only; plural forms
    /// are selected by the caller supplied count.
    pub fn plural_forms(&self) -> Option<&str> {
        self.get("Plural-Forms")
    }

    /// The `nplurals` parameter of `Plural-Forms`.
    pub fn nplurals(&self) -> Option<usize> {
        self.parameter("Plural-Forms", "nplurals")?.parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn parameter(&self, field: &str, parameter: &str) -> Option<&str> {
        self.get(field)?.split(';').find_map(|part| {
            let (key, value) = part.split_once('=')?;
            (key.trim() == parameter).then(|| value.trim())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Project-Id-Version: motr 0.2\n\
        Last-Translator: Jane Doe <jane@example.com>\n\
        Content-Type: text/plain; charset=ISO-8859-1\n\
        Plural-Forms: nplurals=3; plural=(n==1 ? 0 : n%10>=2 && n%10<=4 ? 1 : 2);\n";

    #[test]
    fn fields() {
        let metadata = Metadata::from_header(HEADER);
        assert_eq!(metadata.get("Project-Id-Version"), Some("motr 0.2"));
        assert_eq!(
            metadata.get("last-translator"),
            Some("Jane Doe <jane@example.com>")
        );
        assert_eq!(metadata.get("Language"), None);
        assert_eq!(metadata.charset(), Some("ISO-8859-1"));
        assert_eq!(metadata.nplurals(), Some(3));
        assert!(metadata.plural_forms().unwrap().contains("n%10>=2"));
    }

    #[test]
    fn empty_header() {
        let metadata = Metadata::from_header("");
        assert!(metadata.is_empty());
        assert_eq!(metadata.charset(), None);
        assert_eq!(metadata.nplurals(), None);
    }
}
