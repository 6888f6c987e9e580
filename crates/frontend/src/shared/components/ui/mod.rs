pub mod button;
pub mod card;
pub mod tabs;

pub use button::Button;
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use tabs::{use_tabs, Tabs, TabsContent, TabsContext, TabsList, TabsTrigger};
