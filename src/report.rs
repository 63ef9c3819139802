//! Plain-text rendering of scan results.
//!
//! A [`ScanSession`] holds the last successful classification for one
//! viewing session, so the consumer and detail views can be rendered and
//! re-rendered without another scan.

use crate::patterns::LABOUR_ISSUE;
use crate::result::{BrandContext, Certification, Claim, Classification, ExtractionResult, ScanFailure};

/// Score shown when the service omitted one.
const DEFAULT_TRUST_SCORE: f64 = 50.0;

const MAX_BRAND_CERTS: usize = 4;
const MAX_BRAND_ISSUES: usize = 3;
const EXCERPT_CHARS: usize = 70;
const SENTENCE_CHARS: usize = 180;

/// One viewing session's state.
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    last: Option<Classification>,
}

impl ScanSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a successful result; hand back failures for display.
    ///
    /// A failure does not clear an earlier result.
    pub fn record(&mut self, result: ExtractionResult) -> Result<&Classification, ScanFailure> {
        match result {
            ExtractionResult::Success(classification) => Ok(self.last.insert(*classification)),
            ExtractionResult::Failure(failure) => Err(failure),
        }
    }

    #[must_use]
    pub fn last(&self) -> Option<&Classification> {
        self.last.as_ref()
    }

    #[must_use]
    pub fn consumer_view(&self) -> Option<String> {
        self.last.as_ref().map(render_consumer)
    }

    #[must_use]
    pub fn detail_view(&self) -> Option<String> {
        self.last.as_ref().map(render_detail)
    }
}

/// Verdict word for a 0-100 trust score.
#[must_use]
pub fn score_word(score: f64) -> &'static str {
    if score >= 75.0 {
        "Trustworthy"
    } else if score >= 55.0 {
        "Some concerns"
    } else if score >= 35.0 {
        "Caution advised"
    } else {
        "Likely greenwashing"
    }
}

/// Verdict word for a classification. Serious labour issues cap it at
/// "Caution advised".
#[must_use]
pub fn verdict(classification: &Classification) -> &'static str {
    let score = trust_score(classification);
    let labour_issue = classification
        .brand_context
        .as_ref()
        .is_some_and(|bc| bc.known_issues.iter().any(|issue| LABOUR_ISSUE.is_match(issue)));

    if labour_issue && score >= 55.0 {
        "Caution advised"
    } else {
        score_word(score)
    }
}

fn trust_score(classification: &Classification) -> f64 {
    classification.trust_score.unwrap_or(DEFAULT_TRUST_SCORE)
}

fn format_score(score: f64) -> String {
    if score.fract().abs() < f64::EPSILON {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    } else {
        text.to_string()
    }
}

fn summary_line(classification: &Classification, score: f64) -> String {
    if let Some(summary) = classification.summary.as_deref().filter(|s| !s.is_empty()) {
        return summary.to_string();
    }
    let tier = classification
        .brand_context
        .as_ref()
        .and_then(BrandContext::tier_text)
        .unwrap_or_else(|| "unknown".to_string());
    match (classification.claims.is_empty(), score >= 55.0) {
        (true, true) => format!(
            "No ECGT or FTC violations found on this page, though the brand's overall environmental credentials are {tier}."
        ),
        (true, false) => {
            "No specific violations found on this page, but the brand has limited transparency overall.".to_string()
        }
        (false, _) => classification.score_label.clone().unwrap_or_default(),
    }
}

fn certification_status(cert: &Certification) -> &'static str {
    match (cert.verified, cert.source.as_deref()) {
        (true, _) => "Verified",
        (false, Some("brand_database")) => "Brand cert",
        (false, Some("site_crawl")) => "Found on site",
        _ => "Mentioned",
    }
}

fn consumer_claim(out: &mut String, claim: &Claim) {
    let text = claim.consumer_label.as_deref().unwrap_or(&claim.description);
    let severity = if claim.severity.is_banned() {
        "Banned under EU law"
    } else {
        "Unverified claim"
    };
    out.push_str(&format!("  [{severity}] {text}\n"));

    let guidance = claim
        .remediation
        .as_ref()
        .and_then(|r| r.guidance.as_deref())
        .unwrap_or(&claim.description);
    out.push_str(&format!("    What this means: {guidance}\n"));

    if let Some(good) = claim
        .remediation
        .as_ref()
        .and_then(|r| r.compliant_alternatives.first())
    {
        out.push_str(&format!("    What a good claim looks like: {good}\n"));
    }
}

/// Consumer view: verdict, summary, counts, brand card, claims, certifications.
#[must_use]
pub fn render_consumer(classification: &Classification) -> String {
    let score = trust_score(classification);
    let mut out = String::new();

    out.push_str(&format!("Trust score: {}/100 ({})\n", format_score(score), verdict(classification)));
    out.push_str(&summary_line(classification, score));
    out.push('\n');

    let banned = classification.banned_claims.unwrap_or(0) as usize;
    let restricted = classification.restricted_claims.unwrap_or(0) as usize;
    let certs = classification.certifications_found.len();
    let mut pills = Vec::new();
    if banned > 0 {
        pills.push(plural(banned, "banned claim", "banned claims"));
    }
    if restricted > 0 {
        pills.push(plural(restricted, "needs proof", "need proof"));
    }
    if certs > 0 {
        pills.push(plural(certs, "cert found", "certs found"));
    }
    if !pills.is_empty() {
        out.push_str(&pills.join(" | "));
        out.push('\n');
    }

    if let Some(bc) = &classification.brand_context {
        let name = bc
            .display_name
            .as_deref()
            .or(classification.brand_name.as_deref())
            .unwrap_or("Unknown brand");
        let tier = bc.transparency_tier_label.as_deref().unwrap_or("Unknown");
        out.push_str(&format!("\nBrand: {name} [{tier}]\n"));
        if let Some(summary) = bc.brand_summary.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!("  {summary}\n"));
        }

        if bc.known_brand {
            let mut signals: Vec<String> = Vec::new();
            if bc.b_corp {
                signals.push("B Corp".to_string());
            }
            if bc.fair_wear {
                signals.push("Fair Wear".to_string());
            }
            if bc.sbti_validated {
                signals.push("SBTi validated".to_string());
            } else if bc.sbti {
                signals.push("SBTi committed".to_string());
            }
            if bc.publishes_supplier_list {
                signals.push("Supplier list published".to_string());
            }
            if bc.publishes_impact_report {
                signals.push("Impact report".to_string());
            }
            signals.extend(bc.third_party_certs.iter().take(MAX_BRAND_CERTS).cloned());
            if bc.third_party_certs.len() > MAX_BRAND_CERTS {
                signals.push(format!("+{} more", bc.third_party_certs.len() - MAX_BRAND_CERTS));
            }
            if !bc.b_corp && !bc.fair_wear && !bc.sbti && bc.third_party_certs.is_empty() {
                signals.push("No third-party certs".to_string());
            }
            out.push_str(&format!("  Signals: {}\n", signals.join(", ")));
        }

        for issue in bc.known_issues.iter().take(MAX_BRAND_ISSUES) {
            out.push_str(&format!("  Issue: {issue}\n"));
        }
    }

    if !classification.claims.is_empty() {
        out.push_str("\nClaims:\n");
        for claim in &classification.claims {
            consumer_claim(&mut out, claim);
        }
    }

    let all_certs = &classification.certifications_found;
    if !all_certs.is_empty() {
        out.push_str("\nCertifications found:\n");
        for cert in all_certs {
            let marker = if cert.source.as_deref() == Some("site_crawl") { " *" } else { "" };
            out.push_str(&format!(
                "  {}{marker}: {}\n",
                cert.certification_name,
                certification_status(cert)
            ));
        }
        if all_certs.iter().any(|c| c.source.as_deref() == Some("site_crawl")) {
            let pages = classification.site_crawl.as_ref().map_or(0, |s| s.pages_scanned);
            out.push_str(&format!("  * Found on brand sustainability pages ({pages} pages checked)\n"));
        }
        if all_certs.iter().any(|c| c.source.as_deref() == Some("brand_database")) {
            out.push_str("  Certifications from canopi brand database, verified from public sources\n");
        }
    }

    out
}

fn legal_references(claim: &Claim) -> Vec<String> {
    let usable = |r: &Option<String>| r.as_deref().filter(|s| !s.is_empty() && *s != "N/A").map(str::to_string);
    let mut refs = Vec::new();
    if let Some(eu) = usable(&claim.ecgt_reference) {
        refs.push(format!("EU: {eu}"));
    }
    if let Some(us) = usable(&claim.ftc_reference) {
        refs.push(format!("US: {us}"));
    }
    refs
}

/// Compliance detail view: every claim with its evidence, legal references
/// and required action, then certification verification state.
#[must_use]
pub fn render_detail(classification: &Classification) -> String {
    let mut out = String::new();
    let url = classification.url.as_deref().unwrap_or("");
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    out.push_str(&format!("Page: {url}\n"));

    if classification.claims.is_empty() {
        out.push_str("\nNo ECGT (EU) or FTC (US) violations detected on this page.\n");
        out.push_str(
            "This does not guarantee compliance, only that no flagged terms were found in the visible page content.\n",
        );
    }

    for claim in &classification.claims {
        let jurisdictions = if claim.jurisdictions.is_empty() {
            "EU".to_string()
        } else {
            claim.jurisdictions.join(", ")
        };
        let severity = if claim.severity.is_banned() { "Banned" } else { "Needs evidence" };
        out.push_str(&format!("\n{} [{jurisdictions}] [{severity}]\n", claim.description));
        out.push_str(&format!("  Excerpt: {}\n", excerpt(&claim.matched_text, EXCERPT_CHARS)));
        out.push_str(&format!("  Found in text: \"{}\"\n", excerpt(&claim.sentence, SENTENCE_CHARS)));

        let refs = legal_references(claim);
        let refs = if refs.is_empty() { "none".to_string() } else { refs.join("; ") };
        out.push_str(&format!("  Legal reference: {refs}\n"));

        let guidance = claim
            .remediation
            .as_ref()
            .and_then(|r| r.guidance.as_deref())
            .unwrap_or("");
        out.push_str(&format!("  Required action: {guidance}\n"));

        if let Some(remediation) = &claim.remediation {
            if !remediation.compliant_alternatives.is_empty() {
                out.push_str("  Compliant alternatives:\n");
                for alt in &remediation.compliant_alternatives {
                    out.push_str(&format!("    - {alt}\n"));
                }
            }
        }
    }

    if !classification.certifications_found.is_empty() {
        out.push_str("\nCertifications:\n");
        for cert in &classification.certifications_found {
            let status = if cert.verified {
                format!("Verified: {}", cert.license_number.as_deref().unwrap_or(""))
            } else {
                "Referenced, no license number found".to_string()
            };
            out.push_str(&format!("  {}: {status}\n", cert.certification_name));
        }
    }

    out
}
