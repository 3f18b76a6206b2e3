pub const APP_TITLE: &str = "Cloud Console Login";
pub const APP_TAGLINE: &str = "One-click sign-in to cloud provider consoles";
pub const APP_SUBTAGLINE: &str = "Enter cloud credentials to get a temporary access link";
pub const WINDOW_SIZE: [f32; 2] = [960.0, 640.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 480.0];

pub const FORM_HEADING: &str = "Quick setup";
pub const FORM_SUBHEADING: &str = "Choose a cloud provider and enter its credentials";
pub const LABEL_PROVIDER: &str = "Cloud provider";
pub const LABEL_SECRET_ID: &str = "SecretId";
pub const LABEL_SECRET_KEY: &str = "SecretKey";
pub const LABEL_TOKEN: &str = "Token (or RoleArn)";
pub const LABEL_ROLE_ARN: &str = "RoleArn (or Token)";
pub const LABEL_ADVANCED: &str = "Advanced options";
pub const LABEL_DESTINATION: &str = "Destination";
pub const LABEL_LOGIN_URL: &str = "Login URL";
pub const HINT_SECRET_ID: &str = "Enter SecretId";
pub const HINT_SECRET_KEY: &str = "Enter SecretKey";
pub const HINT_TOKEN: &str = "Enter Token";
pub const HINT_ROLE_ARN: &str = "Enter RoleArn";
pub const LOADING_TEXT: &str = "Generating console link...";

pub const RESULT_HEADING_EMPTY: &str = "Console access link";
pub const RESULT_HEADING_READY: &str = "Console access link generated";
pub const RESULT_PLACEHOLDER: &str =
    "Your console access link will appear here once the form is complete";
pub const RESULT_VALIDITY_NOTE: &str = "Links are valid for one hour";
pub const RESULT_FOOTER: &str = "This area updates automatically when a link is generated";
pub const BUTTON_COPY: &str = "Copy link";
pub const BUTTON_COPIED: &str = "Copied";
pub const BUTTON_OPEN: &str = "Open console";
