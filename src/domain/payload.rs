//! The fixed dashboard patch: target path, insertion point and payload.

use std::path::Path;

/// Target file, relative to the agent project root.
pub const TARGET_RELATIVE_PATH: &str =
    "src/main/kotlin/com/massapay/agent/ui/screens/DashboardScreen.kt";

/// Zero-based line index of the first inserted line (after line 522).
pub const INSERT_INDEX: usize = 522;

/// Idle-rolls warning and deferred-credits banners for the staking card.
pub const PAYLOAD_LINES: [&str; 56] = [
    "                    \n",
    "                    // Idle rolls warning\n",
    "                    val displayIdleRolls = maxOf(0, connectedStakingInfo.finalRolls - connectedStakingInfo.activeRolls)\n",
    "                    if (displayIdleRolls > 0) {\n",
    "                        Spacer(Modifier.height(12.dp))\n",
    "                        Box(\n",
    "                            modifier = Modifier\n",
    "                                .fillMaxWidth()\n",
    "                                .background(Color(0xFFFF9800).copy(alpha = 0.15f), RoundedCornerShape(10.dp))\n",
    "                                .padding(horizontal = 12.dp, vertical = 8.dp)\n",
    "                        ) {\n",
    "                            Row(verticalAlignment = Alignment.CenterVertically) {\n",
    "                                Icon(\n",
    "                                    Icons.Default.Info,\n",
    "                                    contentDescription = null,\n",
    "                                    modifier = Modifier.size(16.dp),\n",
    "                                    tint = Color(0xFFFF9800)\n",
    "                                )\n",
    "                                Spacer(Modifier.width(8.dp))\n",
    "                                Text(\n",
    "                                    \"displayIdleRolls roll{if (displayIdleRolls > 1) \"s\" else \"\"} idle - activating in next cycles\",\n",
    "                                    fontSize = 12.sp,\n",
    "                                    fontWeight = FontWeight.Medium,\n",
    "                                    color = Color(0xFFFF9800)\n",
    "                                )\n",
    "                            }\n",
    "                        }\n",
    "                    }\n",
    "                    \n",
    "                    // Deferred credits\n",
    "                    val deferredAmt = connectedStakingInfo.deferredCredits.toDoubleOrNull() ?: 0.0\n",
    "                    if (deferredAmt > 0) {\n",
    "                        Spacer(Modifier.height(12.dp))\n",
    "                        Box(\n",
    "                            modifier = Modifier\n",
    "                                .fillMaxWidth()\n",
    "                                .background(Color(0xFF667eea).copy(alpha = 0.15f), RoundedCornerShape(10.dp))\n",
    "                                .padding(horizontal = 12.dp, vertical = 8.dp)\n",
    "                        ) {\n",
    "                            Row(verticalAlignment = Alignment.CenterVertically) {\n",
    "                                Icon(\n",
    "                                    Icons.Default.Schedule,\n",
    "                                    contentDescription = null,\n",
    "                                    modifier = Modifier.size(16.dp),\n",
    "                                    tint = Color(0xFF667eea)\n",
    "                                )\n",
    "                                Spacer(Modifier.width(8.dp))\n",
    "                                Text(\n",
    "                                    \"Pending: {String.format(\"%.2f\", deferredAmt)} MAS (sold rolls)\",\n",
    "                                    fontSize = 12.sp,\n",
    "                                    fontWeight = FontWeight.Medium,\n",
    "                                    color = Color(0xFF667eea)\n",
    "                                )\n",
    "                            }\n",
    "                        }\n",
    "                    }\n",
];

/// The one patch this tool knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardPatch {
    target: &'static str,
    index: usize,
    lines: &'static [&'static str],
}

impl DashboardPatch {
    pub fn fixed() -> Self {
        DashboardPatch {
            target: TARGET_RELATIVE_PATH,
            index: INSERT_INDEX,
            lines: &PAYLOAD_LINES,
        }
    }

    pub fn target(&self) -> &Path {
        Path::new(self.target)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn lines(&self) -> &[&'static str] {
        self.lines
    }
}
