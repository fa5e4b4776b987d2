use crate::options::ConvertOptions;

/// State shared by every block of one conversion.
///
/// A fresh context is built for each top-level call, so heading ids start
/// at zero every time.
#[derive(Debug, Clone)]
pub struct ConvertContext {
    pub options: ConvertOptions,
    headings: usize,
}

impl ConvertContext {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            headings: 0,
        }
    }

    /// Returns the id for the next heading and advances the counter.
    pub fn next_heading_id(&mut self) -> String {
        let id = format!("{}{}", self.options.heading_id_prefix, self.headings);
        self.headings += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_ids_count_from_zero() {
        let mut ctx = ConvertContext::new(ConvertOptions::default());
        assert_eq!(ctx.next_heading_id(), "toc0");
        assert_eq!(ctx.next_heading_id(), "toc1");

        let mut fresh = ConvertContext::new(ConvertOptions::default());
        assert_eq!(fresh.next_heading_id(), "toc0");
    }
}
