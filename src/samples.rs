// The fixed example subjects scored by `subjectline samples`.

pub const SAMPLE_SUBJECTS: &[&str] = &[
    "Get cash instantly for your payday expenses!",
    "Apply online for quick loan approval",
    "Congratulations!!! You are a winner of free cash",
    "Protect Your Income From Costly Repair Bills!",
    "Compare 10 Best Car Insurance Companies",
    "Unlock Savings: Get Insured from $30/Month Today!",
];
