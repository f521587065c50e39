// SQL schema definitions for the trading-signals database.
// Every statement is guarded with IF NOT EXISTS so the push is idempotent.

pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);
"#;

pub const CREATE_TRADING_SIGNALS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS trading_signals (
    id SERIAL PRIMARY KEY,
    coin TEXT NOT NULL,
    symbol TEXT NOT NULL,
    timeframe TEXT NOT NULL,
    signal TEXT NOT NULL,
    entry_price NUMERIC NOT NULL,
    target_price NUMERIC NOT NULL,
    stop_loss NUMERIC NOT NULL,
    confidence NUMERIC NOT NULL,
    risk_reward NUMERIC NOT NULL,
    suggested_leverage NUMERIC NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT NOW(),
    active BOOLEAN NOT NULL DEFAULT TRUE
);
"#;

pub const CREATE_TECHNICAL_INDICATORS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS technical_indicators (
    id SERIAL PRIMARY KEY,
    coin TEXT NOT NULL,
    name TEXT NOT NULL,
    value TEXT NOT NULL,
    status TEXT NOT NULL,
    info TEXT,
    updated_at TIMESTAMP NOT NULL DEFAULT NOW()
);
"#;

pub const CREATE_PREDICTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS predictions (
    id SERIAL PRIMARY KEY,
    coin TEXT NOT NULL,
    prediction TEXT NOT NULL,
    accuracy NUMERIC NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT NOW(),
    result TEXT
);
"#;

pub const CREATE_AUTO_SIGNALS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS auto_signals (
    id SERIAL PRIMARY KEY,
    coin TEXT NOT NULL,
    symbol TEXT NOT NULL,
    timeframe TEXT NOT NULL,
    signal_type TEXT NOT NULL,
    entry_price NUMERIC NOT NULL,
    target_price NUMERIC NOT NULL,
    stop_loss NUMERIC NOT NULL,
    risk_reward NUMERIC NOT NULL,
    leverage NUMERIC NOT NULL,
    indicators TEXT NOT NULL,
    confidence NUMERIC NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT NOW(),
    expires_at TIMESTAMP NOT NULL,
    status TEXT NOT NULL DEFAULT 'active',
    profit_loss NUMERIC,
    trade_type TEXT NOT NULL
);
"#;

// Indexes for better query performance on auto_signals. Prepared statements
// cannot carry multiple commands, so each index is its own statement even
// though they report as a single group.
pub const CREATE_IDX_AUTO_SIGNALS_COIN: &str =
    "CREATE INDEX IF NOT EXISTS idx_auto_signals_coin ON auto_signals (coin)";
pub const CREATE_IDX_AUTO_SIGNALS_TIMEFRAME: &str =
    "CREATE INDEX IF NOT EXISTS idx_auto_signals_timeframe ON auto_signals (timeframe)";
pub const CREATE_IDX_AUTO_SIGNALS_STATUS: &str =
    "CREATE INDEX IF NOT EXISTS idx_auto_signals_status ON auto_signals (status)";
pub const CREATE_IDX_AUTO_SIGNALS_EXPIRES_AT: &str =
    "CREATE INDEX IF NOT EXISTS idx_auto_signals_expires_at ON auto_signals (expires_at)";
pub const CREATE_IDX_AUTO_SIGNALS_CREATED_AT: &str =
    "CREATE INDEX IF NOT EXISTS idx_auto_signals_created_at ON auto_signals (created_at DESC)";

/// Expected table names, in declaration order. Used for catalog verification.
pub const TABLE_NAMES: [&str; 5] = [
    "users",
    "trading_signals",
    "technical_indicators",
    "predictions",
    "auto_signals",
];

/// Expected index names on auto_signals.
pub const INDEX_NAMES: [&str; 5] = [
    "idx_auto_signals_coin",
    "idx_auto_signals_timeframe",
    "idx_auto_signals_status",
    "idx_auto_signals_expires_at",
    "idx_auto_signals_created_at",
];

/// One unit of push progress: a group executes its statements in order and
/// emits exactly one confirmation line once all of them have completed.
pub struct SchemaGroup {
    pub name: &'static str,
    pub confirmation: &'static str,
    pub statements: &'static [&'static str],
}

/// The fixed push order: the five tables in declaration order, then the
/// auto_signals indexes as a single group.
pub fn schema_groups() -> &'static [SchemaGroup] {
    &[
        SchemaGroup {
            name: "users",
            confirmation: "✓ Users table created or already exists",
            statements: &[CREATE_USERS_TABLE],
        },
        SchemaGroup {
            name: "trading_signals",
            confirmation: "✓ Trading signals table created or already exists",
            statements: &[CREATE_TRADING_SIGNALS_TABLE],
        },
        SchemaGroup {
            name: "technical_indicators",
            confirmation: "✓ Technical indicators table created or already exists",
            statements: &[CREATE_TECHNICAL_INDICATORS_TABLE],
        },
        SchemaGroup {
            name: "predictions",
            confirmation: "✓ Predictions table created or already exists",
            statements: &[CREATE_PREDICTIONS_TABLE],
        },
        SchemaGroup {
            name: "auto_signals",
            confirmation: "✓ Auto signals table created or already exists",
            statements: &[CREATE_AUTO_SIGNALS_TABLE],
        },
        SchemaGroup {
            name: "indexes",
            confirmation: "✓ Indexes created or already exist",
            statements: &[
                CREATE_IDX_AUTO_SIGNALS_COIN,
                CREATE_IDX_AUTO_SIGNALS_TIMEFRAME,
                CREATE_IDX_AUTO_SIGNALS_STATUS,
                CREATE_IDX_AUTO_SIGNALS_EXPIRES_AT,
                CREATE_IDX_AUTO_SIGNALS_CREATED_AT,
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_declaration_order() {
        let names: Vec<&str> = schema_groups().iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec![
                "users",
                "trading_signals",
                "technical_indicators",
                "predictions",
                "auto_signals",
                "indexes",
            ]
        );
    }

    #[test]
    fn ten_statements_all_guarded() {
        let statements: Vec<&str> = schema_groups()
            .iter()
            .flat_map(|g| g.statements.iter().copied())
            .collect();
        assert_eq!(statements.len(), 10);

        for sql in statements {
            let sql = sql.trim_start();
            assert!(
                sql.starts_with("CREATE TABLE IF NOT EXISTS")
                    || sql.starts_with("CREATE INDEX IF NOT EXISTS"),
                "unguarded statement: {}",
                sql
            );
        }
    }

    #[test]
    fn table_groups_match_expected_names() {
        for (group, table) in schema_groups().iter().zip(TABLE_NAMES.iter()) {
            assert_eq!(group.name, *table);
            assert!(group.statements[0].contains(table));
        }
    }

    #[test]
    fn index_group_creates_every_expected_index() {
        let index_group = schema_groups().last().unwrap();
        assert_eq!(index_group.statements.len(), INDEX_NAMES.len());
        for (sql, name) in index_group.statements.iter().zip(INDEX_NAMES.iter()) {
            assert!(sql.contains(name));
            assert!(sql.contains("ON auto_signals"));
        }
    }

    #[test]
    fn created_at_index_is_descending() {
        assert!(CREATE_IDX_AUTO_SIGNALS_CREATED_AT.contains("(created_at DESC)"));
    }

    #[test]
    fn one_confirmation_line_per_group() {
        for group in schema_groups() {
            assert!(group.confirmation.starts_with('✓'));
        }
    }
}
