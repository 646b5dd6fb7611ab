use {
    crate::{
        common::{Identifier, IndexName, SequenceName, TableName},
        expr::Expression,
        token::Keyword,
    },
    ::common::pub_fields_struct,
    def::DataType,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    Default,
    Visible,
    Invisible,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Nullability {
    Unspecified,
    Null,
    NotNull,
}

/// `[NOT] SUBSTITUTABLE [FORCE]`, meaningful on `ALTER TABLE ... MODIFY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Substitutability {
    Substitutable,
    SubstitutableForce,
    NotSubstitutable,
    NotSubstitutableForce,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceAction {
    NoAction,
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
}

/// Constraint bodies shared by the inline and out-of-line forms. `Check` is
/// recognized and consumed but its predicate is not modeled.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintKind {
    Null,
    NotNull,
    Unique,
    PrimaryKey,
    References(Reference),
    Check,
}

/// One element of a `CREATE TABLE` body, in source order.
#[derive(Debug, PartialEq)]
pub enum TableElement {
    Column(ColumnDef),
    Constraint(OutOfLineConstraint),
}

#[derive(Debug, PartialEq)]
pub enum AlterAction {
    AddColumns(Vec<ColumnDef>),
    ModifyColumns(Vec<ColumnDef>),
    DropColumns(DropColumns),
    RenameColumn { old: Identifier, new: Identifier },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropColumnKind {
    Drop,
    SetUnused,
    DropUnusedColumns,
    DropColumnsContinue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropColumnProp {
    Cascade,
    Invalidate,
    Online,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommentTarget {
    Table,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// `MAXVALUE n` / `MINVALUE n`, or the `NOMAXVALUE` / `NOMINVALUE` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceBound {
    Value(i128),
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceCache {
    Size(i128),
    Disabled,
}

pub_fields_struct! {
    /// The target of a `REFERENCES` clause. `delete_action` and
    /// `update_action` are independent and may arrive in either order.
    #[derive(Debug, Clone, PartialEq)]
    struct Reference {
        table: TableName,
        columns: Vec<Identifier>,
        delete_action: Option<ReferenceAction>,
        update_action: Option<ReferenceAction>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct InlineConstraint {
        name: Option<Identifier>,
        kind: ConstraintKind,
    }

    /// A table-level constraint; `columns` are the constrained columns of
    /// this table (for `FOREIGN KEY (a, b)`, that is `a, b`).
    #[derive(Debug, PartialEq)]
    struct OutOfLineConstraint {
        name: Option<Identifier>,
        kind: ConstraintKind,
        columns: Vec<Identifier>,
    }

    #[derive(Debug, PartialEq)]
    struct ColumnDefault {
        on_null: bool,
        value: Expression,
    }

    #[derive(Debug, PartialEq)]
    struct ColumnDef {
        name: Identifier,
        data_type: DataType,
        collation: Option<Identifier>,
        visibility: Visibility,
        sort: bool,
        substitutable: Option<Substitutability>,
        default: Option<ColumnDefault>,
        nullability: Nullability,
        constraints: Vec<InlineConstraint>,
    }

    #[derive(Debug, PartialEq)]
    struct CreateTableStmt {
        name: TableName,
        elements: Vec<TableElement>,
    }

    #[derive(Debug, PartialEq)]
    struct AlterTableStmt {
        name: TableName,
        actions: Vec<AlterAction>,
    }

    #[derive(Debug, PartialEq)]
    struct DropColumns {
        kind: DropColumnKind,
        columns: Vec<Identifier>,
        props: Vec<DropColumnProp>,
    }

    #[derive(Debug, PartialEq)]
    struct IndexColumn {
        name: Identifier,
        direction: Option<SortDirection>,
    }

    #[derive(Debug, PartialEq)]
    struct CreateIndexStmt {
        unique: bool,
        name: IndexName,
        table: TableName,
        columns: Vec<IndexColumn>,
    }

    #[derive(Debug, PartialEq)]
    struct CreateSequenceStmt {
        name: SequenceName,
        increment_by: Option<i128>,
        start_with: Option<i128>,
        max_value: Option<SequenceBound>,
        min_value: Option<SequenceBound>,
        cycle: Option<bool>,
        cache: Option<SequenceCache>,
        order: Option<bool>,
    }

    #[derive(Debug, PartialEq)]
    struct CommentStmt {
        target: CommentTarget,
        table: TableName,
        column: Option<Identifier>,
        comment: String,
    }

    /// An allow-listed statement consumed without structural modeling; the
    /// captured text on the enclosing [`Statement`](crate::Statement) is the
    /// whole payload.
    #[derive(Debug, PartialEq)]
    struct PassthroughStmt {
        keyword: Keyword,
    }
}
