use super::{AdviceContext, AdviceProvider};
use crate::core::recommendation::RiskLevel;
use std::error::Error;
use std::fmt::Write;

/// Stress above this gets the burnout warning
const HIGH_STRESS: f64 = 7.0;
/// Weekly hours above this get the study-efficiency note
const HEAVY_HOURS: f64 = 10.0;

/// Deterministic four-part strategy plan that needs no network access
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAdvisor;

impl OfflineAdvisor {
    /// Verdict headline for a context
    #[must_use]
    pub fn verdict(ctx: &AdviceContext) -> &'static str {
        if ctx.risk_level == RiskLevel::Critical {
            "SERIOUSLY CONSIDER WITHDRAWING"
        } else if ctx.is_passing() {
            "STAY THE COURSE"
        } else {
            "FIGHT TO RECOVER"
        }
    }

    /// Render the Markdown plan
    #[must_use]
    pub fn plan(self, ctx: &AdviceContext) -> String {
        let gap = ctx.passing_grade - ctx.current_grade;
        let passing = ctx.is_passing();

        let strategy = if ctx.risk_level == RiskLevel::Critical {
            let required_note = if ctx.is_required {
                "Because this course is required, talk to your advisor before withdrawing so you can plan when to retake it."
            } else {
                "Since this course is not required, dropping it to protect your GPA may be the strategic move."
            };
            format!(
                "The odds of passing are low without a major intervention. {required_note}"
            )
        } else if passing {
            "You are in a safe zone, but complacency is the enemy. Lock in this grade.".to_string()
        } else {
            format!("You are within striking distance ({gap:.1}%). Dropping now would be premature.")
        };

        let stress = if ctx.stress_level > HIGH_STRESS {
            "Your stress level is high (7+/10). Prioritize sleep and breaks to avoid burnout."
        } else {
            "Your stress levels appear manageable. Maintain a balanced routine."
        };
        let workload = if ctx.hours_spent > HEAVY_HOURS {
            "You are investing a lot of time (>10h/wk). Focus on high-impact study methods rather than just reading."
        } else {
            "Your time investment is reasonable. Ensure you are using this time efficiently."
        };

        let mut out = String::new();
        let _ = writeln!(out, "### 1. SITUATION ASSESSMENT");
        let _ = writeln!(
            out,
            "You are currently {} **{}** with a **{:.1}%**.",
            if passing { "passing" } else { "failing" },
            ctx.course_name,
            ctx.current_grade
        );
        if passing {
            let _ = writeln!(out, "You are above the threshold.");
        } else {
            let _ = writeln!(
                out,
                "You are trailing the passing mark ({}%) by **{gap:.1} points**.",
                ctx.passing_grade
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "### 2. STRATEGIC RECOMMENDATION");
        let _ = writeln!(out, "**VERDICT: {}**", Self::verdict(ctx));
        let _ = writeln!(out, "{strategy}");
        let _ = writeln!(out);
        let _ = writeln!(out, "### 3. TACTICAL BATTLE PLAN");
        let _ = writeln!(out, "- **Mental Game**: {stress}");
        let _ = writeln!(out, "- **Efficiency**: {workload}");
        let _ = writeln!(
            out,
            "- **Grade Triage**: Identify the single assignment with the highest weight remaining. That is your priority."
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "### 4. IMMEDIATE NEXT STEPS (48 Hours)");
        let _ = writeln!(
            out,
            "- [ ] Calculate exactly what grade you need on the next exam to pass."
        );
        let _ = writeln!(
            out,
            "- [ ] Email the professor if you have specific questions about material."
        );
        let _ = write!(
            out,
            "- [ ] Set a specific 2-hour block tomorrow dedicated solely to this course."
        );
        out
    }
}

impl AdviceProvider for OfflineAdvisor {
    fn generate_advice(&self, ctx: &AdviceContext) -> Result<String, Box<dyn Error>> {
        Ok(self.plan(ctx))
    }
}
