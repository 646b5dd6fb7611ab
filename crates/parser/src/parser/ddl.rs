use {
    super::{
        common::match_token,
        error::{Error, Result},
        Parser,
    },
    ast::{
        token::{Keyword, Token},
        AlterAction, AlterTableStmt, ColumnDef, ColumnDefault, ConstraintKind, CreateIndexStmt,
        CreateTableStmt, DropColumnKind, DropColumnProp, DropColumns, Identifier, IndexColumn,
        IndexName, InlineConstraint, Nullability, OutOfLineConstraint, Reference, ReferenceAction,
        SortDirection, Spanned, StatementKind, Substitutability, TableElement, Visibility,
    },
    def::{DataType, Precision},
};

impl<'a> Parser<'a> {
    /// The `CREATE` keyword has already been consumed.
    pub(super) fn parse_create(&mut self) -> Result<StatementKind> {
        match_token!(self, {
            Spanned(Token::Keyword(Keyword::TABLE), _) => self.parse_create_table(),
            Spanned(Token::Keyword(Keyword::SEQUENCE), _) => self.parse_create_sequence(),
            Spanned(Token::Keyword(Keyword::INDEX), _) => self.parse_create_index(false),
            Spanned(Token::Keyword(Keyword::UNIQUE), _) => {
                self.must_match(Token::Keyword(Keyword::INDEX))?;
                self.parse_create_index(true)
            },
        })
    }

    fn parse_create_table(&mut self) -> Result<StatementKind> {
        let name = self.parse_table_name()?;
        let Spanned(elements, _) =
            self.parse_comma_separated_within_parentheses(Self::parse_table_element, false)?;

        Ok(StatementKind::CreateTable(CreateTableStmt { name, elements }))
    }

    fn parse_table_element(&mut self) -> Result<TableElement> {
        match self.tokens.peek() {
            Some(Ok(Spanned(
                Token::Keyword(
                    Keyword::CONSTRAINT
                    | Keyword::PRIMARY
                    | Keyword::UNIQUE
                    | Keyword::FOREIGN
                    | Keyword::CHECK,
                ),
                _,
            ))) => Ok(TableElement::Constraint(self.parse_out_of_line_constraint()?)),
            _ => Ok(TableElement::Column(self.parse_column_def()?)),
        }
    }

    fn parse_out_of_line_constraint(&mut self) -> Result<OutOfLineConstraint> {
        let name = match self.try_match_keyword(Keyword::CONSTRAINT) {
            true => Some(self.parse_identifier()?),
            false => None,
        };

        match_token!(self, {
            Spanned(Token::Keyword(Keyword::PRIMARY), _) => {
                self.must_match(Token::Keyword(Keyword::KEY))?;
                let Spanned(columns, _) =
                    self.parse_comma_separated_within_parentheses(Self::parse_identifier, false)?;

                Ok(OutOfLineConstraint {
                    name,
                    kind: ConstraintKind::PrimaryKey,
                    columns,
                })
            },
            Spanned(Token::Keyword(Keyword::UNIQUE), _) => {
                let Spanned(columns, _) =
                    self.parse_comma_separated_within_parentheses(Self::parse_identifier, false)?;

                Ok(OutOfLineConstraint {
                    name,
                    kind: ConstraintKind::Unique,
                    columns,
                })
            },
            Spanned(Token::Keyword(Keyword::FOREIGN), _) => {
                self.must_match(Token::Keyword(Keyword::KEY))?;
                let Spanned(columns, _) =
                    self.parse_comma_separated_within_parentheses(Self::parse_identifier, false)?;
                self.must_match(Token::Keyword(Keyword::REFERENCES))?;

                Ok(OutOfLineConstraint {
                    name,
                    kind: ConstraintKind::References(self.parse_reference()?),
                    columns,
                })
            },
            Spanned(Token::Keyword(Keyword::CHECK), _) => {
                self.consume_parenthesized()?;

                Ok(OutOfLineConstraint {
                    name,
                    kind: ConstraintKind::Check,
                    columns: vec![],
                })
            },
        })
    }

    /// The `REFERENCES` keyword has already been consumed.
    fn parse_reference(&mut self) -> Result<Reference> {
        let table = self.parse_table_name()?;
        let columns = match self.tokens.peek() {
            Some(Ok(Spanned(Token::LeftParen, _))) => {
                self.parse_comma_separated_within_parentheses(Self::parse_identifier, false)?
                    .0
            }
            _ => vec![],
        };

        let mut delete_action = None;
        let mut update_action = None;
        loop {
            if self.match_keyword_sequence(&[Keyword::ON, Keyword::DELETE]) {
                delete_action = Some(self.parse_reference_action()?);
            } else if self.match_keyword_sequence(&[Keyword::ON, Keyword::UPDATE]) {
                update_action = Some(self.parse_reference_action()?);
            } else {
                break;
            }
        }

        Ok(Reference {
            table,
            columns,
            delete_action,
            update_action,
        })
    }

    fn parse_reference_action(&mut self) -> Result<ReferenceAction> {
        match_token!(self, {
            Spanned(Token::Keyword(Keyword::NO), _) => {
                self.must_match(Token::Keyword(Keyword::ACTION))?;
                Ok(ReferenceAction::NoAction)
            },
            Spanned(Token::Keyword(Keyword::CASCADE), _) => Ok(ReferenceAction::Cascade),
            Spanned(Token::Keyword(Keyword::RESTRICT), _) => Ok(ReferenceAction::Restrict),
            Spanned(Token::Keyword(Keyword::SET), _) => match_token!(self, {
                Spanned(Token::Keyword(Keyword::NULL), _) => Ok(ReferenceAction::SetNull),
                Spanned(Token::Keyword(Keyword::DEFAULT), _) => Ok(ReferenceAction::SetDefault),
            }),
        })
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;

        // the properties between the type and the default clause may come in
        // any order
        let mut collation = None;
        let mut visibility = Visibility::Default;
        let mut sort = false;
        let mut substitutable = None;
        loop {
            if self.try_match_keyword(Keyword::COLLATE) {
                collation = Some(self.parse_identifier()?);
            } else if self.try_match_keyword(Keyword::SORT) {
                sort = true;
            } else if self.try_match_keyword(Keyword::VISIBLE) {
                visibility = Visibility::Visible;
            } else if self.try_match_keyword(Keyword::INVISIBLE) {
                visibility = Visibility::Invisible;
            } else if self.try_match_keyword(Keyword::SUBSTITUTABLE) {
                substitutable = Some(match self.try_match_keyword(Keyword::FORCE) {
                    true => Substitutability::SubstitutableForce,
                    false => Substitutability::Substitutable,
                });
            } else if self.match_keyword_sequence(&[Keyword::NOT, Keyword::SUBSTITUTABLE]) {
                substitutable = Some(match self.try_match_keyword(Keyword::FORCE) {
                    true => Substitutability::NotSubstitutableForce,
                    false => Substitutability::NotSubstitutable,
                });
            } else {
                break;
            }
        }

        let default = match self.try_match_keyword(Keyword::DEFAULT) {
            true => Some(self.parse_column_default()?),
            false => None,
        };

        let (nullability, constraints) = self.parse_inline_constraints()?;

        Ok(ColumnDef {
            name,
            data_type,
            collation,
            visibility,
            sort,
            substitutable,
            default,
            nullability,
            constraints,
        })
    }

    fn parse_column_default(&mut self) -> Result<ColumnDefault> {
        let mut on_null = self.match_keyword_sequence(&[Keyword::ON, Keyword::NULL]);
        let value = self.parse_expression()?;
        // `ON NULL` sits before the value, but the trailing position occurs
        // in the wild too
        on_null = on_null || self.match_keyword_sequence(&[Keyword::ON, Keyword::NULL]);

        Ok(ColumnDefault { on_null, value })
    }

    fn parse_inline_constraints(&mut self) -> Result<(Nullability, Vec<InlineConstraint>)> {
        let mut nullability = Nullability::Unspecified;
        let mut constraints = vec![];

        loop {
            let name = match self.try_match_keyword(Keyword::CONSTRAINT) {
                true => Some(self.parse_identifier()?),
                false => None,
            };

            let kind = if self.try_match_keyword(Keyword::NULL) {
                nullability = Nullability::Null;
                ConstraintKind::Null
            } else if self.match_keyword_sequence(&[Keyword::NOT, Keyword::NULL]) {
                nullability = Nullability::NotNull;
                ConstraintKind::NotNull
            } else if self.try_match_keyword(Keyword::UNIQUE) {
                ConstraintKind::Unique
            } else if self.match_keyword_sequence(&[Keyword::PRIMARY, Keyword::KEY]) {
                ConstraintKind::PrimaryKey
            } else if self.try_match_keyword(Keyword::REFERENCES) {
                ConstraintKind::References(self.parse_reference()?)
            } else if self.try_match_keyword(Keyword::CHECK) {
                self.consume_parenthesized()?;
                ConstraintKind::Check
            } else if name.is_some() {
                // a lone `CONSTRAINT name` with no body
                return Err(self.unexpected_here());
            } else {
                break;
            };

            constraints.push(InlineConstraint { name, kind });
        }

        Ok((nullability, constraints))
    }

    /// Type names are ordinary identifiers; `number(10, 2)`, `number(*)` and
    /// bare `date` all go through here.
    fn parse_data_type(&mut self) -> Result<DataType> {
        let name = match_token!(self, {
            Spanned(Token::Identifier, span) => self.src[span].to_string(),
        });

        let (precision, scale) = match self.try_match(Token::LeftParen) {
            Some(_) => {
                let precision = self.parse_type_argument()?;
                let scale = match self.try_match(Token::Comma) {
                    Some(_) => Some(self.parse_type_argument()?),
                    None => None,
                };
                self.must_match(Token::RightParen)?;

                (Some(precision), scale)
            }
            None => (None, None),
        };

        Ok(DataType {
            name,
            precision,
            scale,
        })
    }

    fn parse_type_argument(&mut self) -> Result<Precision> {
        match self.try_match(Token::Asterisk) {
            Some(_) => Ok(Precision::Wildcard),
            None => Ok(Precision::Number(self.parse_integer()?)),
        }
    }

    /// The `ALTER` keyword has already been consumed.
    pub(super) fn parse_alter(&mut self) -> Result<StatementKind> {
        self.must_match(Token::Keyword(Keyword::TABLE))?;
        let name = self.parse_table_name()?;

        let mut actions = vec![self.parse_alter_action()?];
        while matches!(
            self.tokens.peek(),
            Some(Ok(Spanned(
                Token::Keyword(
                    Keyword::ADD
                        | Keyword::MODIFY
                        | Keyword::DROP
                        | Keyword::SET
                        | Keyword::RENAME
                ),
                _,
            )))
        ) {
            actions.push(self.parse_alter_action()?);
        }

        Ok(StatementKind::AlterTable(AlterTableStmt { name, actions }))
    }

    fn parse_alter_action(&mut self) -> Result<AlterAction> {
        match_token!(self, {
            Spanned(Token::Keyword(Keyword::ADD), _) => {
                Ok(AlterAction::AddColumns(self.parse_column_def_group()?))
            },
            Spanned(Token::Keyword(Keyword::MODIFY), _) => {
                Ok(AlterAction::ModifyColumns(self.parse_column_def_group()?))
            },
            Spanned(Token::Keyword(Keyword::DROP), _) => self.parse_drop_clause(),
            Spanned(Token::Keyword(Keyword::SET), _) => {
                self.must_match(Token::Keyword(Keyword::UNUSED))?;
                let columns = self.parse_column_group()?;
                let props = self.parse_drop_column_props()?;

                Ok(AlterAction::DropColumns(DropColumns {
                    kind: DropColumnKind::SetUnused,
                    columns,
                    props,
                }))
            },
            Spanned(Token::Keyword(Keyword::RENAME), _) => {
                self.must_match(Token::Keyword(Keyword::COLUMN))?;
                let old = self.parse_identifier()?;
                self.must_match(Token::Keyword(Keyword::TO))?;
                let new = self.parse_identifier()?;

                Ok(AlterAction::RenameColumn { old, new })
            },
        })
    }

    /// `ADD` and `MODIFY` take one bare column or a parenthesized list.
    fn parse_column_def_group(&mut self) -> Result<Vec<ColumnDef>> {
        match self.tokens.peek() {
            Some(Ok(Spanned(Token::LeftParen, _))) => Ok(self
                .parse_comma_separated_within_parentheses(Self::parse_column_def, false)?
                .0),
            _ => Ok(vec![self.parse_column_def()?]),
        }
    }

    /// `COLUMN c` names one column, `(c1, c2)` names several.
    fn parse_column_group(&mut self) -> Result<Vec<Identifier>> {
        match self.try_match_keyword(Keyword::COLUMN) {
            true => Ok(vec![self.parse_identifier()?]),
            false => Ok(self
                .parse_comma_separated_within_parentheses(Self::parse_identifier, false)?
                .0),
        }
    }

    fn parse_drop_clause(&mut self) -> Result<AlterAction> {
        // `DROP UNUSED COLUMNS` and `DROP COLUMNS CONTINUE` carry no column
        // list of their own
        let kind = if self.match_keyword_sequence(&[Keyword::UNUSED, Keyword::COLUMNS]) {
            DropColumnKind::DropUnusedColumns
        } else if self.match_keyword_sequence(&[Keyword::COLUMNS, Keyword::CONTINUE]) {
            DropColumnKind::DropColumnsContinue
        } else {
            let columns = self.parse_column_group()?;
            let props = self.parse_drop_column_props()?;

            return Ok(AlterAction::DropColumns(DropColumns {
                kind: DropColumnKind::Drop,
                columns,
                props,
            }));
        };

        let props = self.parse_drop_column_props()?;

        Ok(AlterAction::DropColumns(DropColumns {
            kind,
            columns: vec![],
            props,
        }))
    }

    fn parse_drop_column_props(&mut self) -> Result<Vec<DropColumnProp>> {
        let mut props = vec![];

        loop {
            if self.try_match_keyword(Keyword::CASCADE) {
                // `CASCADE CONSTRAINTS` in full; the noun may be omitted
                self.try_match_keyword(Keyword::CONSTRAINTS);
                props.push(DropColumnProp::Cascade);
            } else if self.try_match_keyword(Keyword::INVALIDATE) {
                props.push(DropColumnProp::Invalidate);
            } else if self.try_match_keyword(Keyword::ONLINE) {
                props.push(DropColumnProp::Online);
            } else {
                break;
            }
        }

        Ok(props)
    }

    /// The `INDEX` keyword has already been consumed.
    fn parse_create_index(&mut self, unique: bool) -> Result<StatementKind> {
        let (schema, index) = self.parse_qualified_name()?;
        self.must_match(Token::Keyword(Keyword::ON))?;
        let table = self.parse_table_name()?;
        let Spanned(columns, _) =
            self.parse_comma_separated_within_parentheses(Self::parse_index_column, false)?;

        Ok(StatementKind::CreateIndex(CreateIndexStmt {
            unique,
            name: IndexName { schema, index },
            table,
            columns,
        }))
    }

    fn parse_index_column(&mut self) -> Result<IndexColumn> {
        let name = self.parse_identifier()?;
        let direction = if self.try_match_keyword(Keyword::ASC) {
            Some(SortDirection::Ascending)
        } else if self.try_match_keyword(Keyword::DESC) {
            Some(SortDirection::Descending)
        } else {
            None
        };

        Ok(IndexColumn { name, direction })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, ast::expr::Expression, ast::TableName};

    fn parse_kind(sql: &str) -> StatementKind {
        let mut stmts = Parser::parse(sql).unwrap();

        assert_eq!(stmts.len(), 1);
        stmts.remove(0).kind
    }

    fn create_table(sql: &str) -> CreateTableStmt {
        match parse_kind(sql) {
            StatementKind::CreateTable(stmt) => stmt,
            other => panic!("expected a create table statement, got {other:?}"),
        }
    }

    fn alter_table(sql: &str) -> AlterTableStmt {
        match parse_kind(sql) {
            StatementKind::AlterTable(stmt) => stmt,
            other => panic!("expected an alter table statement, got {other:?}"),
        }
    }

    fn data_type(name: &str, precision: Option<Precision>, scale: Option<Precision>) -> DataType {
        DataType {
            name: name.to_string(),
            precision,
            scale,
        }
    }

    fn column(name: &str, data_type: DataType) -> ColumnDef {
        ColumnDef {
            name: Identifier::unquoted(name),
            data_type,
            collation: None,
            visibility: Visibility::Default,
            sort: false,
            substitutable: None,
            default: None,
            nullability: Nullability::Unspecified,
            constraints: vec![],
        }
    }

    #[test]
    fn create_table_with_columns() {
        let stmt = create_table(
            "CREATE TABLE hr.employees (\n\
             \tid number(10) NOT NULL,\n\
             \tname varchar2(50) DEFAULT 'n/a',\n\
             \tsalary number(*, 2)\n\
             );",
        );

        assert_eq!(
            stmt,
            CreateTableStmt {
                name: TableName {
                    schema: Some(Identifier::unquoted("hr")),
                    table: Identifier::unquoted("employees"),
                },
                elements: vec![
                    TableElement::Column(ColumnDef {
                        nullability: Nullability::NotNull,
                        constraints: vec![InlineConstraint {
                            name: None,
                            kind: ConstraintKind::NotNull,
                        }],
                        ..column("id", data_type("number", Some(Precision::Number(10)), None))
                    }),
                    TableElement::Column(ColumnDef {
                        default: Some(ColumnDefault {
                            on_null: false,
                            value: Expression::StringLiteral("n/a".into()),
                        }),
                        ..column("name", data_type("varchar2", Some(Precision::Number(50)), None))
                    }),
                    TableElement::Column(column(
                        "salary",
                        data_type(
                            "number",
                            Some(Precision::Wildcard),
                            Some(Precision::Number(2)),
                        ),
                    )),
                ],
            }
        );
    }

    #[test]
    fn out_of_line_constraints() {
        let stmt = create_table(
            "CREATE TABLE t (
                a number,
                b number,
                CONSTRAINT t_pk PRIMARY KEY (a),
                CONSTRAINT t_fk FOREIGN KEY (b) REFERENCES u (x) ON DELETE CASCADE,
                CHECK (a > 0 AND b <> 1)
            );",
        );

        assert_eq!(
            &stmt.elements[2..],
            &[
                TableElement::Constraint(OutOfLineConstraint {
                    name: Some(Identifier::unquoted("t_pk")),
                    kind: ConstraintKind::PrimaryKey,
                    columns: vec![Identifier::unquoted("a")],
                }),
                TableElement::Constraint(OutOfLineConstraint {
                    name: Some(Identifier::unquoted("t_fk")),
                    kind: ConstraintKind::References(Reference {
                        table: TableName {
                            schema: None,
                            table: Identifier::unquoted("u"),
                        },
                        columns: vec![Identifier::unquoted("x")],
                        delete_action: Some(ReferenceAction::Cascade),
                        update_action: None,
                    }),
                    columns: vec![Identifier::unquoted("b")],
                }),
                TableElement::Constraint(OutOfLineConstraint {
                    name: None,
                    kind: ConstraintKind::Check,
                    columns: vec![],
                }),
            ]
        );
    }

    #[test]
    fn foreign_key_actions_in_either_order() {
        let a = create_table(
            "CREATE TABLE t (b number REFERENCES u ON DELETE SET NULL ON UPDATE RESTRICT);",
        );
        let b = create_table(
            "CREATE TABLE t (b number REFERENCES u ON UPDATE RESTRICT ON DELETE SET NULL);",
        );

        assert_eq!(a, b);

        let TableElement::Column(col) = &a.elements[0] else {
            panic!("expected a column");
        };
        assert_eq!(
            col.constraints,
            vec![InlineConstraint {
                name: None,
                kind: ConstraintKind::References(Reference {
                    table: TableName {
                        schema: None,
                        table: Identifier::unquoted("u"),
                    },
                    columns: vec![],
                    delete_action: Some(ReferenceAction::SetNull),
                    update_action: Some(ReferenceAction::Restrict),
                }),
            }]
        );
    }

    #[test]
    fn column_properties_in_any_order() {
        let a = create_table("CREATE TABLE t (a varchar2(10) INVISIBLE COLLATE binary_ci SORT);");
        let b = create_table("CREATE TABLE t (a varchar2(10) SORT COLLATE binary_ci INVISIBLE);");

        assert_eq!(a, b);
        assert_eq!(
            a.elements[0],
            TableElement::Column(ColumnDef {
                collation: Some(Identifier::unquoted("binary_ci")),
                visibility: Visibility::Invisible,
                sort: true,
                ..column("a", data_type("varchar2", Some(Precision::Number(10)), None))
            })
        );
    }

    #[test]
    fn default_on_null() {
        let stmt = create_table("CREATE TABLE t (a number DEFAULT ON NULL 0);");

        assert_eq!(
            stmt.elements[0],
            TableElement::Column(ColumnDef {
                default: Some(ColumnDefault {
                    on_null: true,
                    value: Expression::NumberLiteral("0".into()),
                }),
                ..column("a", data_type("number", None, None))
            })
        );
    }

    #[test]
    fn named_inline_constraint() {
        let stmt = create_table("CREATE TABLE t (a number CONSTRAINT a_nn NOT NULL);");

        assert_eq!(
            stmt.elements[0],
            TableElement::Column(ColumnDef {
                nullability: Nullability::NotNull,
                constraints: vec![InlineConstraint {
                    name: Some(Identifier::unquoted("a_nn")),
                    kind: ConstraintKind::NotNull,
                }],
                ..column("a", data_type("number", None, None))
            })
        );
    }

    #[test]
    fn inline_primary_key() {
        let stmt = create_table("CREATE TABLE t (a number PRIMARY KEY)");

        assert_eq!(
            stmt.elements[0],
            TableElement::Column(ColumnDef {
                constraints: vec![InlineConstraint {
                    name: None,
                    kind: ConstraintKind::PrimaryKey,
                }],
                ..column("a", data_type("number", None, None))
            })
        );
    }

    #[test]
    fn quoted_column_name() {
        let stmt = create_table("CREATE TABLE t (\"Max Value\" number(*));");

        assert_eq!(
            stmt.elements[0],
            TableElement::Column(ColumnDef {
                name: Identifier::quoted("Max Value"),
                ..column("ignored", data_type("number", Some(Precision::Wildcard), None))
            })
        );
    }

    #[test]
    fn dangling_constraint_name() {
        let sql = "CREATE TABLE t (a number CONSTRAINT a_nn);";

        assert_eq!(
            Parser::parse(sql),
            Err(Error::UnexpectedToken {
                token: ")".into(),
                offset: 40,
                line: 1,
            })
        );
    }

    #[test]
    fn alter_table_actions() {
        let stmt = alter_table(
            "ALTER TABLE t
                ADD (a number, b varchar2(5))
                MODIFY c number(12)
                DROP COLUMN d
                RENAME COLUMN e TO f;",
        );

        assert_eq!(
            stmt.actions,
            vec![
                AlterAction::AddColumns(vec![
                    column("a", data_type("number", None, None)),
                    column("b", data_type("varchar2", Some(Precision::Number(5)), None)),
                ]),
                AlterAction::ModifyColumns(vec![column(
                    "c",
                    data_type("number", Some(Precision::Number(12)), None),
                )]),
                AlterAction::DropColumns(DropColumns {
                    kind: DropColumnKind::Drop,
                    columns: vec![Identifier::unquoted("d")],
                    props: vec![],
                }),
                AlterAction::RenameColumn {
                    old: Identifier::unquoted("e"),
                    new: Identifier::unquoted("f"),
                },
            ]
        );
    }

    #[test]
    fn alter_table_drop_column_list() {
        let stmt = alter_table("ALTER TABLE t DROP (a, b);");

        assert_eq!(
            stmt.actions,
            vec![AlterAction::DropColumns(DropColumns {
                kind: DropColumnKind::Drop,
                columns: vec![Identifier::unquoted("a"), Identifier::unquoted("b")],
                props: vec![],
            })]
        );
    }

    #[test]
    fn modify_substitutable() {
        let stmt = alter_table("ALTER TABLE t MODIFY c number NOT SUBSTITUTABLE FORCE;");
        assert_eq!(
            stmt.actions,
            vec![AlterAction::ModifyColumns(vec![ColumnDef {
                substitutable: Some(Substitutability::NotSubstitutableForce),
                ..column("c", data_type("number", None, None))
            }])]
        );

        let stmt = alter_table("ALTER TABLE t MODIFY c number SUBSTITUTABLE;");
        assert_eq!(
            stmt.actions,
            vec![AlterAction::ModifyColumns(vec![ColumnDef {
                substitutable: Some(Substitutability::Substitutable),
                ..column("c", data_type("number", None, None))
            }])]
        );
    }

    #[test]
    fn alter_table_drop_forms() {
        let stmt = alter_table("ALTER TABLE t SET UNUSED (a, b) CASCADE CONSTRAINTS ONLINE;");
        assert_eq!(
            stmt.actions,
            vec![AlterAction::DropColumns(DropColumns {
                kind: DropColumnKind::SetUnused,
                columns: vec![Identifier::unquoted("a"), Identifier::unquoted("b")],
                props: vec![DropColumnProp::Cascade, DropColumnProp::Online],
            })]
        );

        let stmt = alter_table("ALTER TABLE t DROP UNUSED COLUMNS;");
        assert_eq!(
            stmt.actions,
            vec![AlterAction::DropColumns(DropColumns {
                kind: DropColumnKind::DropUnusedColumns,
                columns: vec![],
                props: vec![],
            })]
        );

        let stmt = alter_table("ALTER TABLE t DROP COLUMNS CONTINUE;");
        assert_eq!(
            stmt.actions,
            vec![AlterAction::DropColumns(DropColumns {
                kind: DropColumnKind::DropColumnsContinue,
                columns: vec![],
                props: vec![],
            })]
        );
    }

    #[test]
    fn create_index() {
        let kind = parse_kind(
            "CREATE UNIQUE INDEX hr.i_emp ON hr.employees (last_name ASC, hire_date DESC, dept);",
        );

        assert_eq!(
            kind,
            StatementKind::CreateIndex(CreateIndexStmt {
                unique: true,
                name: IndexName {
                    schema: Some(Identifier::unquoted("hr")),
                    index: Identifier::unquoted("i_emp"),
                },
                table: TableName {
                    schema: Some(Identifier::unquoted("hr")),
                    table: Identifier::unquoted("employees"),
                },
                columns: vec![
                    IndexColumn {
                        name: Identifier::unquoted("last_name"),
                        direction: Some(SortDirection::Ascending),
                    },
                    IndexColumn {
                        name: Identifier::unquoted("hire_date"),
                        direction: Some(SortDirection::Descending),
                    },
                    IndexColumn {
                        name: Identifier::unquoted("dept"),
                        direction: None,
                    },
                ],
            })
        );
    }

    #[test]
    fn create_index_plain() {
        let kind = parse_kind("CREATE INDEX i ON t (c);");

        assert_eq!(
            kind,
            StatementKind::CreateIndex(CreateIndexStmt {
                unique: false,
                name: IndexName {
                    schema: None,
                    index: Identifier::unquoted("i"),
                },
                table: TableName {
                    schema: None,
                    table: Identifier::unquoted("t"),
                },
                columns: vec![IndexColumn {
                    name: Identifier::unquoted("c"),
                    direction: None,
                }],
            })
        );
    }
}
