pub const HEADING: &str = "Hello World";

pub const SUBTITLE: &str = "React + Vite + TypeScript + Tailwind CSS";
