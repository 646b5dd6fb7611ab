use {
    super::{error::Result, Parser},
    ast::{
        token::Keyword, CreateSequenceStmt, SequenceBound, SequenceCache, SequenceName,
        StatementKind,
    },
};

impl<'a> Parser<'a> {
    /// `CREATE SEQUENCE` has already been consumed. The clauses that follow
    /// the name come in any order; a repeated clause overwrites the earlier
    /// one.
    pub(super) fn parse_create_sequence(&mut self) -> Result<StatementKind> {
        let (schema, sequence) = self.parse_qualified_name()?;

        let mut stmt = CreateSequenceStmt {
            name: SequenceName { schema, sequence },
            increment_by: None,
            start_with: None,
            max_value: None,
            min_value: None,
            cycle: None,
            cache: None,
            order: None,
        };

        loop {
            if self.match_keyword_sequence(&[Keyword::INCREMENT, Keyword::BY]) {
                stmt.increment_by = Some(self.parse_integer()?);
            } else if self.match_keyword_sequence(&[Keyword::START, Keyword::WITH]) {
                stmt.start_with = Some(self.parse_integer()?);
            } else if self.try_match_keyword(Keyword::MAXVALUE) {
                stmt.max_value = Some(SequenceBound::Value(self.parse_integer()?));
            } else if self.try_match_keyword(Keyword::NOMAXVALUE) {
                stmt.max_value = Some(SequenceBound::Unbounded);
            } else if self.try_match_keyword(Keyword::MINVALUE) {
                stmt.min_value = Some(SequenceBound::Value(self.parse_integer()?));
            } else if self.try_match_keyword(Keyword::NOMINVALUE) {
                stmt.min_value = Some(SequenceBound::Unbounded);
            } else if self.try_match_keyword(Keyword::CYCLE) {
                stmt.cycle = Some(true);
            } else if self.try_match_keyword(Keyword::NOCYCLE) {
                stmt.cycle = Some(false);
            } else if self.try_match_keyword(Keyword::CACHE) {
                stmt.cache = Some(SequenceCache::Size(self.parse_integer()?));
            } else if self.try_match_keyword(Keyword::NOCACHE) {
                stmt.cache = Some(SequenceCache::Disabled);
            } else if self.try_match_keyword(Keyword::ORDER) {
                stmt.order = Some(true);
            } else if self.try_match_keyword(Keyword::NOORDER) {
                stmt.order = Some(false);
            } else {
                break;
            }
        }

        Ok(StatementKind::CreateSequence(stmt))
    }
}
