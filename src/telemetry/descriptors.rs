use serde::{Deserialize, Serialize};

/// Color token shared by a card's accent and its status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Emerald,
    Blue,
    Purple,
    Amber,
    Slate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Server,
    Activity,
    Cpu,
    Wallet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub id: String,
    pub name: String,
    pub value: String,
    pub status: String,
    #[serde(default)]
    pub status_tone: Tone,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub tone: Tone,
}

pub fn default_static_metrics() -> Vec<MetricDescriptor> {
    vec![
        MetricDescriptor {
            id: "nodes".to_string(),
            name: "Active Nodes".to_string(),
            value: "3".to_string(),
            status: "Operational".to_string(),
            status_tone: Tone::Emerald,
            icon: Icon::Server,
            tone: Tone::Emerald,
        },
        MetricDescriptor {
            id: "jobs".to_string(),
            name: "Total Compute Jobs".to_string(),
            value: "1,284".to_string(),
            status: "+12% this week".to_string(),
            status_tone: Tone::Emerald,
            icon: Icon::Activity,
            tone: Tone::Blue,
        },
        MetricDescriptor {
            id: "latency".to_string(),
            name: "Network Latency".to_string(),
            value: "24ms".to_string(),
            status: "Optimal".to_string(),
            status_tone: Tone::Emerald,
            icon: Icon::Cpu,
            tone: Tone::Purple,
        },
    ]
}

/// Static descriptors followed by the dynamic one, which is always last.
pub fn with_dynamic(
    static_metrics: &[MetricDescriptor],
    dynamic: MetricDescriptor,
) -> Vec<MetricDescriptor> {
    let mut metrics = Vec::with_capacity(static_metrics.len() + 1);
    metrics.extend_from_slice(static_metrics);
    metrics.push(dynamic);
    metrics
}
