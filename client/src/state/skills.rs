//! Skill records rendered into the skills section.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// One proficiency entry. Static for the lifetime of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillRecord {
    pub id: &'static str,
    pub label: &'static str,
    /// Target percentage in `0..=100`.
    pub percent: u8,
    pub description: &'static str,
}

impl SkillRecord {
    /// Accessible name of the progress bar.
    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("{} proficiency", self.label)
    }

    /// Inline style fixing the bar's final width.
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.percent)
    }
}

pub const SKILLS: &[SkillRecord] = &[
    SkillRecord {
        id: "industrial-systems",
        label: "Industrial Systems",
        percent: 90,
        description: "PLC, PID, Instrumentation, Maintenance",
    },
    SkillRecord {
        id: "ml-data",
        label: "ML & Data Analytics",
        percent: 75,
        description: "Predictive Analytics, Time Series, Visualization",
    },
    SkillRecord { id: "cloud", label: "Cloud Computing", percent: 70, description: "AWS, Linux, Networking, Security" },
    SkillRecord { id: "embedded", label: "STM32/Embedded", percent: 85, description: "FreeRTOS, Modbus, IoT Systems" },
    SkillRecord { id: "plc", label: "PLC & SCADA", percent: 88, description: "Siemens TIA Portal, HMI, DCS" },
    SkillRecord {
        id: "python",
        label: "Python & Scripting",
        percent: 80,
        description: "Automation, Data Analysis, Bash",
    },
];
