//! Console output for generated secrets.

use std::io::{self, Write};

use crate::generator::Secret;

/// Steps for registering the primary secret in the deployment dashboard.
const DEPLOY_STEPS: [&str; 4] = [
    "Go to Vercel Dashboard → Your Project → Settings → Environment Variables",
    "Add JWT_SECRET with the value above",
    "Make sure to set scope to \"Production, Preview, Development\"",
    "Redeploy your project",
];

/// Writes the banner shown before anything is generated.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🔐 Generating secure secrets for your application...")?;
    writeln!(out)
}

/// Writes each secret under its label, followed by the dashboard
/// instructions and the closing reminder.
pub fn write_report<W: Write>(out: &mut W, secrets: &[Secret]) -> io::Result<()> {
    for secret in secrets {
        writeln!(out, "{}:", secret.kind())?;
        writeln!(out, "{}", secret.expose())?;
        writeln!(out)?;
    }

    writeln!(out, "📋 Copy these values to your Vercel environment variables:")?;
    for (i, step) in DEPLOY_STEPS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, step)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "⚠️  Keep these secrets secure and never commit them to your repository!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::tests::CountingRng;
    use crate::generator::{generate_all, SecretKind};

    fn render(secrets: &[Secret]) -> String {
        let mut buf = Vec::new();
        write_banner(&mut buf).unwrap();
        write_report(&mut buf, secrets).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_lists_labels_then_values() {
        let secrets = generate_all(&mut CountingRng(0)).unwrap();
        let text = render(&secrets);
        let lines: Vec<&str> = text.lines().collect();

        let jwt = lines.iter().position(|l| *l == "JWT_SECRET:").unwrap();
        assert_eq!(lines[jwt + 1], secrets[0].expose());
        assert_eq!(lines[jwt + 1].len(), 64);

        let random = lines.iter().position(|l| *l == "RANDOM_SECRET:").unwrap();
        assert!(random > jwt);
        assert_eq!(lines[random + 1], secrets[1].expose());
        assert_eq!(lines[random + 1].len(), 32);
    }

    #[test]
    fn test_report_contains_instructions_and_reminder() {
        let secrets = generate_all(&mut CountingRng(7)).unwrap();
        let text = render(&secrets);

        assert!(text.starts_with("🔐 Generating secure secrets"));
        assert!(text.contains("1. Go to Vercel Dashboard"));
        assert!(text.contains(&format!("2. Add {} with the value above", SecretKind::Jwt.label())));
        assert!(text.contains("4. Redeploy your project"));
        assert!(text
            .trim_end()
            .ends_with("never commit them to your repository!"));
    }
}
