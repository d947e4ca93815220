//! Built-in cross-dialect type mapping tables.
//!
//! Coverage is asymmetric on purpose: well-travelled pairs (MySQL↔Postgres,
//! MSSQL→Oracle) are dense, low-traffic pairs are thin, and DB2→Oracle has
//! no entries at all. Unmapped types fall through to the default rule in
//! [`super::TypeMappingTable::map_column_type`].

use crate::core::Dialect::{Db2, Derby, Mssql, Mysql, Oracle, Postgresql, H2};

use super::TypeMappingTable;

/// Register all built-in mapping tables.
pub(super) fn register(t: &mut TypeMappingTable) {
    mysql_to_postgres(t);
    mysql_to_oracle(t);
    mysql_to_db2(t);
    mysql_to_mssql(t);

    postgres_to_mysql(t);
    postgres_to_db2(t);
    postgres_to_mssql(t);
    postgres_to_oracle(t);

    mssql_to_oracle(t);
    mssql_to_mysql(t);
    mssql_to_postgres(t);
    mssql_to_db2(t);

    db2_to_mysql(t);
    db2_to_postgres(t);
    db2_to_mssql(t);

    oracle_to_mysql(t);
    oracle_to_postgres(t);
    oracle_to_db2(t);
    oracle_to_mssql(t);

    h2_to_derby(t);
    derby_to_h2(t);
}

fn mysql_to_postgres(t: &mut TypeMappingTable) {
    t.add_mapping(Mysql, Postgresql, "BIGINT AUTO_INCREMENT", "BIGSERIAL");
    t.add_mapping(Mysql, Postgresql, "BIGINT UNSIGNED", "NUMERIC(20)");
    t.add_mapping(Mysql, Postgresql, "BINARY", "BYTEA");
    t.add_mapping(Mysql, Postgresql, "BLOB", "BYTEA");
    t.add_mapping(Mysql, Postgresql, "DATETIME", "TIMESTAMP");
    t.add_mapping(Mysql, Postgresql, "DOUBLE", "DOUBLE PRECISION");
    t.add_mapping(Mysql, Postgresql, "FLOAT", "REAL");
    t.add_mapping(Mysql, Postgresql, "INT UNSIGNED", "BIGINT");
    t.add_mapping(Mysql, Postgresql, "INTEGER AUTO_INCREMENT", "SERIAL");
    t.add_mapping(Mysql, Postgresql, "LONGBLOB", "BYTEA");
    t.add_mapping(Mysql, Postgresql, "LONGTEXT", "TEXT");
    t.add_mapping(Mysql, Postgresql, "MEDIUMINT", "INTEGER");
    t.add_mapping(Mysql, Postgresql, "MEDIUMINT UNSIGNED", "INTEGER");
    t.add_mapping(Mysql, Postgresql, "MEDIUMBLOB", "BYTEA");
    t.add_mapping(Mysql, Postgresql, "MEDIUMTEXT", "TEXT");
    t.add_mapping(Mysql, Postgresql, "SMALLINT AUTO_INCREMENT", "SMALLSERIAL");
    t.add_mapping(Mysql, Postgresql, "SMALLINT UNSIGNED", "INTEGER");
    t.add_mapping(Mysql, Postgresql, "TINYBLOB", "BYTEA");
    t.add_mapping(Mysql, Postgresql, "TINYINT", "SMALLINT");
    t.add_mapping(Mysql, Postgresql, "TINYINT AUTO_INCREMENT", "SMALLSERIAL");
    t.add_mapping(Mysql, Postgresql, "TINYINT UNSIGNED", "SMALLSERIAL");
    t.add_mapping(Mysql, Postgresql, "TINYTEXT", "TEXT");
    t.add_mapping(Mysql, Postgresql, "VARBINARY", "BYTEA");
    t.add_mapping(Mysql, Postgresql, "BYTEA", "BYTEA");
}

fn mysql_to_oracle(t: &mut TypeMappingTable) {
    t.add_mapping(Mysql, Oracle, "LONGTEXT", "CLOB");
    t.add_mapping(Mysql, Oracle, "LONGBLOB", "BLOB");
    t.add_mapping(Mysql, Oracle, "BIT", "RAW");
    t.add_mapping(Mysql, Oracle, "BIGINT", "NUMBER(19, 0)");
    t.add_mapping(Mysql, Oracle, "DATETIME", "DATE");
    t.add_mapping(Mysql, Oracle, "DECIMAL", "NUMBER(12)");
    t.add_mapping(Mysql, Oracle, "DOUBLE", "FLOAT (24)");
    t.add_mapping(Mysql, Oracle, "DOUBLE PRECISION", "FLOAT (24)");
    t.add_mapping(Mysql, Oracle, "ENUM", "VARCHAR2");
    t.add_mapping(Mysql, Oracle, "INT", "NUMBER(10, 0)");
    t.add_mapping(Mysql, Oracle, "INTEGER", "NUMBER(10, 0)");
    t.add_mapping(Mysql, Oracle, "MEDIUMBLOB", "BLOB");
    t.add_mapping(Mysql, Oracle, "MEDIUMINT", "NUMBER(7, 0)");
    t.add_mapping(Mysql, Oracle, "MEDIUMTEXT", "CLOB");
    t.add_mapping(Mysql, Oracle, "NUMERIC", "NUMBER");
    t.add_mapping(Mysql, Oracle, "REAL", "FLOAT (24)");
    t.add_mapping(Mysql, Oracle, "SET", "VARCHAR2");
    t.add_mapping(Mysql, Oracle, "SMALLINT", "NUMBER(5, 0)");
    t.add_mapping(Mysql, Oracle, "TEXT", "VARCHAR2");
    t.add_mapping(Mysql, Oracle, "TIME", "DATE");
    t.add_mapping(Mysql, Oracle, "TIMESTAMP", "DATE");
    t.add_mapping(Mysql, Oracle, "TINYBLOB", "RAW");
    t.add_mapping(Mysql, Oracle, "TINYINT", "NUMBER(3, 0)");
    t.add_mapping(Mysql, Oracle, "TINYTEXT", "VARCHAR2");
    t.add_mapping(Mysql, Oracle, "VARBINARY", "BYTEA");
    t.add_mapping(Mysql, Oracle, "YEAR", "NUMBER");
}

fn mysql_to_db2(t: &mut TypeMappingTable) {
    t.add_mapping(Mysql, Db2, "LONGTEXT", "VARCHAR(4000)");
    t.add_mapping(Mysql, Db2, "LONGBLOB", "BLOB");
    t.add_mapping(Mysql, Db2, "DECIMAL", "DECIMAL(16)");
    t.add_mapping(Mysql, Db2, "MEDIUMBLOB", "BLOB(16M)");
    t.add_mapping(Mysql, Db2, "BIGINT", "BIGINT");
    t.add_mapping(Mysql, Db2, "VARCHAR", "VARCHAR(700)");
    t.add_mapping(Mysql, Db2, "DATETIME", "TIMESTAMP");
}

fn mysql_to_mssql(t: &mut TypeMappingTable) {
    t.add_mapping(Mysql, Mssql, "LONGTEXT", "NVARCHAR(4000)");
    t.add_mapping(Mysql, Mssql, "LONGBLOB", "VARBINARY(MAX)");
    t.add_mapping(Mysql, Mssql, "VARCHAR", "NVARCHAR(4000)");
    t.add_mapping(Mysql, Mssql, "DECIMAL", "DECIMAL(38)");
    t.add_mapping(Mysql, Mssql, "TIMESTAMP", "DATETIME2");
    t.add_mapping(Mysql, Mssql, "MEDIUMBLOB", "VARBINARY(MAX)");
    t.add_mapping(Mysql, Mssql, "DOUBLE", "FLOAT");
    t.add_mapping(Mysql, Mssql, "BLOB", "VARBINARY(MAX)");
}

fn postgres_to_mysql(t: &mut TypeMappingTable) {
    t.add_mapping(Postgresql, Mysql, "ARRAY", "LONGTEXT");
    t.add_mapping(Postgresql, Mysql, "BIGSERIAL", "BIGINT");
    t.add_mapping(Postgresql, Mysql, "BOOLEAN", "TINYINT(1)");
    t.add_mapping(Postgresql, Mysql, "BOX", "POLYGON");
    t.add_mapping(Postgresql, Mysql, "BYTEA", "LONGBLOB");
    t.add_mapping(Postgresql, Mysql, "CIDR", "VARCHAR(43)");
    t.add_mapping(Postgresql, Mysql, "CIRCLE", "POLYGON");
    t.add_mapping(Postgresql, Mysql, "DOUBLE PRECISION", "DOUBLE");
    t.add_mapping(Postgresql, Mysql, "INET", "VARCHAR(43)");
    t.add_mapping(Postgresql, Mysql, "INTERVAL", "TIME");
    t.add_mapping(Postgresql, Mysql, "JSON", "LONGTEXT");
    t.add_mapping(Postgresql, Mysql, "LINE", "LINESTRING");
    t.add_mapping(Postgresql, Mysql, "LSEG", "LINESTRING");
    t.add_mapping(Postgresql, Mysql, "MACADDR", "VARCHAR(17)");
    t.add_mapping(Postgresql, Mysql, "MONEY", "DECIMAL(19,2)");
    t.add_mapping(Postgresql, Mysql, "NUMERIC", "DECIMAL");
    t.add_mapping(Postgresql, Mysql, "PATH", "LINESTRING");
    t.add_mapping(Postgresql, Mysql, "REAL", "FLOAT");
    t.add_mapping(Postgresql, Mysql, "SERIAL", "INT");
    t.add_mapping(Postgresql, Mysql, "SMALLSERIAL", "SMALLINT");
    t.add_mapping(Postgresql, Mysql, "TEXT", "LONGTEXT");
    t.add_mapping(Postgresql, Mysql, "TIMESTAMP", "DATETIME");
    t.add_mapping(Postgresql, Mysql, "TSQUERY", "LONGTEXT");
    t.add_mapping(Postgresql, Mysql, "TSVECTOR", "LONGTEXT");
    t.add_mapping(Postgresql, Mysql, "TXID_SNAPSHOT", "VARCHART");
    t.add_mapping(Postgresql, Mysql, "UUID", "VARCHAR(36)");
    t.add_mapping(Postgresql, Mysql, "XML", "LONGTEXT");
    t.add_mapping(Postgresql, Mysql, "CHARACTER", "CHARACTER VARYING");
    t.add_mapping(Postgresql, Mysql, "CHARACTER VARYING", "VARCHAR");
    t.add_mapping(Postgresql, Mysql, "CHAR", "VARCHAR");
    t.add_mapping(Postgresql, Mysql, "OID", "BIGINT");
}

fn postgres_to_db2(t: &mut TypeMappingTable) {
    t.add_mapping(Postgresql, Db2, "TEXT", "VARCHAR(4000)");
    t.add_mapping(Postgresql, Db2, "BYTEA", "BLOB");
    t.add_mapping(Postgresql, Db2, "NUMERIC", "DECIMAL(16)");
    t.add_mapping(Postgresql, Db2, "INT(2)", "DECIMAL(16)");
    t.add_mapping(Postgresql, Db2, "INT(4)", "DECIMAL(16)");
    t.add_mapping(Postgresql, Db2, "BIGINT", "BIGINT");
    t.add_mapping(Postgresql, Db2, "BIGSERIAL", "BIGINT");
    t.add_mapping(Postgresql, Db2, "OID", "DECIMAL(16)");
}

fn postgres_to_mssql(t: &mut TypeMappingTable) {
    t.add_mapping(Postgresql, Mssql, "TEXT", "NVARCHAR(4000)");
    t.add_mapping(Postgresql, Mssql, "BYTEA", "BINARY");
    t.add_mapping(Postgresql, Mssql, "INT4", "INT");
    t.add_mapping(Postgresql, Mssql, "INT2", "INT");
    t.add_mapping(Postgresql, Mssql, "INT8", "INT");
    t.add_mapping(Postgresql, Mssql, "BIGSERIAL", "BIGINT");
    t.add_mapping(Postgresql, Mssql, "BIGINT", "BIGINT");
    t.add_mapping(Postgresql, Mssql, "OID", "BIGINT");
    t.add_mapping(Postgresql, Mssql, "TIMESTAMP", "SMALLDATETIME");
}

fn postgres_to_oracle(t: &mut TypeMappingTable) {
    t.add_mapping(Postgresql, Oracle, "TEXT", "CLOB");
    t.add_mapping(Postgresql, Oracle, "BYTEA", "BLOB");
    t.add_mapping(Postgresql, Oracle, "NUMERIC", "NUMERIC(38)");
    t.add_mapping(Postgresql, Oracle, "INT4", "NUMBER");
    t.add_mapping(Postgresql, Oracle, "INT2", "NUMBER");
    t.add_mapping(Postgresql, Oracle, "INT8", "NUMBER");
    t.add_mapping(Postgresql, Oracle, "BIGSERIAL", "NUMBER");
}

fn mssql_to_oracle(t: &mut TypeMappingTable) {
    t.add_mapping(Mssql, Oracle, "BIGINT", "NUMBER(19)");
    t.add_mapping(Mssql, Oracle, "BINARY", "RAW");
    t.add_mapping(Mssql, Oracle, "BIT", "NUMBER(3)");
    t.add_mapping(Mssql, Oracle, "DATETIME", "DATE");
    t.add_mapping(Mssql, Oracle, "DECIMAL", "NUMBER(38)");
    t.add_mapping(Mssql, Oracle, "FLOAT", "FLOAT(49)");
    t.add_mapping(Mssql, Oracle, "IMAGE", "LONG RAW");
    t.add_mapping(Mssql, Oracle, "INTEGER", "NUMBER(38)");
    t.add_mapping(Mssql, Oracle, "MONEY", "NUMBER(19,4)");
    t.add_mapping(Mssql, Oracle, "NTEXT", "LONG");
    t.add_mapping(Mssql, Oracle, "NVARCHAR", "NCHAR(255)");
    t.add_mapping(Mssql, Oracle, "NUMERIC", "NUMBER(38)");
    t.add_mapping(Mssql, Oracle, "REAL", "FLOAT(23)");
    t.add_mapping(Mssql, Oracle, "SMALL DATETIME", "DATE");
    t.add_mapping(Mssql, Oracle, "SMALL MONEY", "NUMBER(10,4)");
    t.add_mapping(Mssql, Oracle, "SMALLINT", "NUMBER(5)");
    t.add_mapping(Mssql, Oracle, "TEXT", "LONG");
    t.add_mapping(Mssql, Oracle, "TIMESTAMP", "RAW");
    t.add_mapping(Mssql, Oracle, "TINYINT", "NUMBER(3)");
    t.add_mapping(Mssql, Oracle, "UNIQUEIDENTIFIER", "CHAR(36)");
    t.add_mapping(Mssql, Oracle, "VARBINARY", "LONG RAW");
    t.add_mapping(Mssql, Oracle, "VARCHAR", "VARCHAR2");
}

fn mssql_to_mysql(t: &mut TypeMappingTable) {
    t.add_mapping(Mssql, Mysql, "NVARCHAR", "VARCHAR(1000)");
    t.add_mapping(Mssql, Mysql, "DATETIME2", "DATETIME");
    t.add_mapping(Mssql, Mysql, "VARBINARY", "MEDIUMBLOB");
    t.add_mapping(Mssql, Mysql, "FLOAT", "DOUBLE");
}

fn mssql_to_postgres(t: &mut TypeMappingTable) {
    t.add_mapping(Mssql, Postgresql, "NVARCHAR", "TEXT");
    t.add_mapping(Mssql, Postgresql, "VARBINARY", "BYTEA");
    t.add_mapping(Mssql, Postgresql, "DATETIME2", "TIMESTAMP");
    t.add_mapping(Mssql, Postgresql, "FLOAT", "DOUBLE PRECISION");
}

fn mssql_to_db2(t: &mut TypeMappingTable) {
    t.add_mapping(Mssql, Db2, "VARBINARY", "BLOB");
    t.add_mapping(Mssql, Db2, "NVARCHAR", "VARCHAR(600)");
    t.add_mapping(Mssql, Db2, "DECIMAL", "DECIMAL(16)");
    t.add_mapping(Mssql, Db2, "INTEGER", "INT");
    t.add_mapping(Mssql, Db2, "DATETIME2", "TIMESTAMP");
}

fn db2_to_mysql(t: &mut TypeMappingTable) {
    t.add_mapping(Db2, Mysql, "CHAR", "VARCHAR(4000)");
    t.add_mapping(Db2, Mysql, "CLOB", "LONGBLOB");
    t.add_mapping(Db2, Mysql, "INTEGER", "INT(11)");
}

fn db2_to_postgres(t: &mut TypeMappingTable) {
    t.add_mapping(Db2, Postgresql, "BLOB", "BYTEA");
}

fn db2_to_mssql(t: &mut TypeMappingTable) {
    t.add_mapping(Db2, Mssql, "BLOB", "VARBINARY");
}

// DB2 → Oracle intentionally has no table; the pair falls back for every type.

fn oracle_to_mysql(t: &mut TypeMappingTable) {
    t.add_mapping(Oracle, Mysql, "NUMBER(10, 0)", "INT");
    t.add_mapping(Oracle, Mysql, "BLOB", "LONGBLOB");
    t.add_mapping(Oracle, Mysql, "CLOB", "MEDIUMTEXT");
    t.add_mapping(Oracle, Mysql, "NUMBER", "NUMERIC");
    t.add_mapping(Oracle, Mysql, "VARCHAR2", "VARCHAR(200)");
}

fn oracle_to_postgres(t: &mut TypeMappingTable) {
    t.add_mapping(Oracle, Postgresql, "VARCHAR2", "CHAR(255)");
    t.add_mapping(Oracle, Postgresql, "BLOB", "BYTEA");
    t.add_mapping(Oracle, Postgresql, "CLOB", "TEXT");
    t.add_mapping(Oracle, Postgresql, "NUMBER", "NUMERIC");
}

fn oracle_to_db2(t: &mut TypeMappingTable) {
    t.add_mapping(Oracle, Db2, "VARCHAR2", "VARCHAR(400)");
    t.add_mapping(Oracle, Db2, "NUMBER", "BIGINT");
    t.add_mapping(Oracle, Db2, "CLOB", "VARCHAR(4000)");
}

fn oracle_to_mssql(t: &mut TypeMappingTable) {
    t.add_mapping(Oracle, Mssql, "VARCHAR2", "VARCHAR(4000)");
    t.add_mapping(Oracle, Mssql, "CLOB", "VARCHAR(4000)");
    t.add_mapping(Oracle, Mssql, "BLOB", "VARBINARY");
    t.add_mapping(Oracle, Mssql, "NUMBER", "NUMERIC(38)");
}

fn h2_to_derby(t: &mut TypeMappingTable) {
    t.add_mapping(H2, Derby, "LONGTEXT", "CLOB");
    t.add_mapping(H2, Derby, "LONGBLOB", "BLOB");
}

fn derby_to_h2(t: &mut TypeMappingTable) {
    t.add_mapping(Derby, H2, "LONGTEXT", "CLOB");
    t.add_mapping(Derby, H2, "LONGBLOB", "BLOB");
}
