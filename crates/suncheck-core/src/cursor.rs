use crate::extraction::PageContent;

/// Reads the lines of a multi-page document as one continuous stream.
///
/// Page breaks are invisible to callers: once a page is exhausted the cursor
/// continues at the first line of the next non-empty page.
#[derive(Debug, Clone)]
pub struct PageCursor<'a> {
    pages: &'a [PageContent],
    page: usize,
    line: usize,
}

impl<'a> PageCursor<'a> {
    pub fn new(pages: &'a [PageContent]) -> Self {
        let mut cursor = PageCursor {
            pages,
            page: 0,
            line: 0,
        };
        cursor.skip_exhausted_pages();
        cursor
    }

    /// The next line without consuming it. None at end of document.
    pub fn peek(&self) -> Option<&'a str> {
        self.pages
            .get(self.page)
            .and_then(|p| p.lines.get(self.line))
            .map(|s| s.as_str())
    }

    /// Consume and return the next line. None at end of document.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.line += 1;
        self.skip_exhausted_pages();
        Some(line)
    }

    /// (page number, 1-based line number) of the line `peek` would return.
    pub fn location(&self) -> (usize, usize) {
        match self.pages.get(self.page) {
            Some(p) => (p.page_number, self.line + 1),
            None => (
                self.pages.last().map(|p| p.page_number).unwrap_or(0),
                self.pages.last().map(|p| p.lines.len()).unwrap_or(0) + 1,
            ),
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }

    fn skip_exhausted_pages(&mut self) {
        while let Some(p) = self.pages.get(self.page) {
            if self.line < p.lines.len() {
                break;
            }
            self.page += 1;
            self.line = 0;
        }
    }
}
