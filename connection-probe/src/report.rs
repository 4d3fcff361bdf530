//! Operator-facing probe output.

use std::io::{self, Write};

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::models::ConnectionReport;

/// Shown after every failure, whatever its kind.
pub const TROUBLESHOOTING_TIPS: [&str; 4] = [
    "Check if MONGODB_URI is set in your .env file",
    "Verify your MongoDB Atlas connection string",
    "Make sure your IP is whitelisted in MongoDB Atlas",
    "Check if your MongoDB Atlas cluster is running",
];

/// Writes the banner shown before the attempt starts.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🧪 Testing MongoDB Connection...")?;
    writeln!(out)
}

/// Announces the attempt and which connection string is in effect.
pub fn write_target<W: Write>(out: &mut W, config: &ProbeConfig) -> io::Result<()> {
    writeln!(out, "🔌 Attempting to connect...")?;
    writeln!(out, "📍 URI: {}", config.describe_target())
}

pub fn write_success<W: Write>(out: &mut W, report: &ConnectionReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✅ SUCCESS: MongoDB Connected!")?;
    writeln!(out, "🌐 Host: {}", report.host)?;
    writeln!(out, "🗄️  Database: {}", report.database)?;
    writeln!(out, "🔗 Connection State: {}", report.state)?;
    writeln!(out, "📚 Collections found: {}", report.collections.len())?;

    if !report.collections.is_empty() {
        writeln!(out, "📋 Collection names:")?;
        for name in &report.collections {
            writeln!(out, "   - {name}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "🔄 Connection closed successfully")
}

/// Writes the failure diagnostic followed by the troubleshooting tips.
pub fn write_failure<W: Write>(out: &mut W, err: &ProbeError) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "❌ ERROR: Failed to connect to MongoDB")?;
    writeln!(out, "💬 Error: {err}")?;
    writeln!(out)?;
    writeln!(out, "💡 Troubleshooting tips:")?;
    for (i, tip) in TROUBLESHOOTING_TIPS.iter().enumerate() {
        writeln!(out, "   {}. {}", i + 1, tip)?;
    }
    Ok(())
}
