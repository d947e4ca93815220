//! End-to-end schema script generation: generate DDL for a realistic
//! catalog, lex the rendered script back and check the normalized
//! statements an executing orchestrator would see.

use std::sync::Arc;

use schema_bridge::{
    ColumnInfo, DatabaseInfo, Dialect, ForeignKeyInfo, SchemaScriptGenerator, SqlLexer, TableInfo,
    TypeCode, TypeMappingTable,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn id_column() -> ColumnInfo {
    ColumnInfo::new("ID", TypeCode::Bigint, "BIGINT", 19, 0, false)
}

fn keyed_table(name: &str) -> TableInfo {
    let mut table = TableInfo::new(name);
    table.columns.push(id_column());
    table.primary_key.push("ID".to_string());
    table
}

/// Eight-table sample catalog. Every table has a primary key; only the
/// user/role link table carries foreign keys.
fn sample_catalog() -> DatabaseInfo {
    let mut db = DatabaseInfo::new("FOO");

    let mut company = TableInfo::new("FOO_COMPANY");
    company.columns.push(id_column());
    company
        .columns
        .push(ColumnInfo::new("SUPPLIER", TypeCode::Char, "CHAR", 0, 0, true));
    company
        .columns
        .push(ColumnInfo::new("NAME", TypeCode::Varchar, "VARCHAR", 0, 0, true));
    company.primary_key.push("ID".to_string());
    db.tables.push(company);

    let mut user = keyed_table("FOO_USER");
    user.columns
        .push(ColumnInfo::new("USERNAME", TypeCode::Varchar, "VARCHAR", 0, 0, false));
    db.tables.push(user);

    db.tables.push(keyed_table("FOO_ROLE"));
    db.tables.push(keyed_table("FOO_USER_COMPANY"));
    db.tables.push(keyed_table("FOO_DATA"));
    db.tables.push(keyed_table("FOO_NOTE"));
    db.tables.push(keyed_table("FOO_AUDIT"));

    let mut user_roles = keyed_table("FOO_USER_ROLES");
    user_roles
        .columns
        .push(ColumnInfo::new("USER_ID", TypeCode::Bigint, "BIGINT", 19, 0, false));
    user_roles
        .columns
        .push(ColumnInfo::new("ROLE_ID", TypeCode::Bigint, "BIGINT", 19, 0, false));
    user_roles
        .foreign_keys
        .push(ForeignKeyInfo::new("USER_ID", "FOO_USER", "ID"));
    user_roles
        .foreign_keys
        .push(ForeignKeyInfo::new("ROLE_ID", "FOO_ROLE", "ID"));
    db.tables.push(user_roles);

    db
}

fn generate_and_lex(db: &DatabaseInfo) -> Vec<String> {
    init_tracing();
    // Same-dialect pair: no mappings registered, type names pass through.
    let generator = SchemaScriptGenerator::new(
        Dialect::H2,
        Dialect::H2,
        Arc::new(TypeMappingTable::with_builtins()),
    );
    let script = generator.generate_schema(db).join("\n");
    SqlLexer::new().parse(&script)
}

#[test]
fn test_pinned_statements() {
    let statements = generate_and_lex(&sample_catalog());

    assert!(statements.contains(
        &"CREATE TABLE FOO_COMPANY ( ID BIGINT NOT NULL,  SUPPLIER CHAR,  NAME VARCHAR )"
            .to_string()
    ));
    assert!(statements.contains(
        &"ALTER TABLE FOO_COMPANY ADD CONSTRAINT PK_FOO_COMPANY_1 PRIMARY KEY (ID)".to_string()
    ));
    assert!(statements.contains(
        &"ALTER TABLE FOO_USER_ROLES ADD CONSTRAINT FK_USER_ID_ID_9 \
          FOREIGN KEY (USER_ID) REFERENCES FOO_USER(ID)"
            .to_string()
    ));
}

#[test]
fn test_statement_counts_and_phases() {
    let db = sample_catalog();
    let statements = generate_and_lex(&db);

    // 8 creates, 8 primary keys, 2 foreign keys.
    assert_eq!(statements.len(), 18);

    let last_create = statements
        .iter()
        .rposition(|s| s.starts_with("CREATE TABLE"))
        .unwrap();
    let first_alter = statements
        .iter()
        .position(|s| s.starts_with("ALTER TABLE"))
        .unwrap();
    assert_eq!(last_create, 7);
    assert_eq!(first_alter, 8);
}

#[test]
fn test_constraint_names_unique_across_script() {
    let statements = generate_and_lex(&sample_catalog());

    let mut names: Vec<String> = statements
        .iter()
        .filter_map(|s| {
            let start = s.find("ADD CONSTRAINT ")? + "ADD CONSTRAINT ".len();
            let rest = &s[start..];
            Some(rest[..rest.find(' ')?].to_string())
        })
        .collect();

    assert_eq!(names.len(), 10);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 10);
}

#[test]
fn test_second_foreign_key_continues_counter() {
    let statements = generate_and_lex(&sample_catalog());

    assert!(statements.contains(
        &"ALTER TABLE FOO_USER_ROLES ADD CONSTRAINT FK_ROLE_ID_ID_10 \
          FOREIGN KEY (ROLE_ID) REFERENCES FOO_ROLE(ID)"
            .to_string()
    ));
}
