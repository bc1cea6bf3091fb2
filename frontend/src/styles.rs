pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-red-700 via-gray-900 to-yellow-600";
pub const CONTAINER: &str = "container mx-auto px-4 py-8";
pub const CONTAINER_SM: &str = "max-w-2xl mx-auto";
pub const CARD: &str = "bg-white/95 backdrop-blur rounded-2xl shadow-xl p-8 space-y-6 text-center";
pub const CARD_SUCCESS: &str = "bg-green-100 border border-green-400 rounded-lg p-4";
pub const CARD_ERROR: &str = "bg-red-50 border border-red-200 rounded-lg p-4 text-red-700";
pub const BUTTON_PRIMARY: &str = "w-full inline-flex items-center justify-center px-4 py-3 rounded-lg font-semibold text-white bg-red-600 hover:bg-red-700 shadow-lg transition-all duration-300";
pub const BUTTON_FACEBOOK: &str = "w-full inline-flex items-center justify-center px-4 py-3 rounded-lg font-semibold text-white bg-blue-600 hover:bg-blue-700";
pub const BUTTON_WHATSAPP: &str = "w-full inline-flex items-center justify-center px-4 py-3 rounded-lg font-semibold text-white bg-green-600 hover:bg-green-700";
pub const INPUT: &str = "mt-1 block w-full rounded-lg border-0 bg-white py-2 px-3 text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 placeholder:text-gray-400 focus:ring-2 focus:ring-red-600";
pub const FORM: &str = "space-y-4 text-left";
pub const TEXT_TITLE: &str = "text-4xl md:text-6xl font-bold text-white mb-2";
pub const TEXT_SUBTITLE: &str = "text-2xl md:text-3xl font-semibold text-yellow-400";
pub const TEXT_H3: &str = "text-2xl font-semibold text-gray-900";
pub const TEXT_BODY: &str = "text-gray-700";
pub const TEXT_SMALL: &str = "text-xs text-gray-500";
pub const TEXT_ERROR: &str = "text-sm text-red-600";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900";
pub const TEXT_COUNTDOWN: &str = "text-4xl font-bold text-red-600";
pub const PROGRESS_TRACK: &str = "w-full bg-gray-200 rounded-full h-2.5";
pub const PROGRESS_BAR: &str = "bg-gradient-to-r from-red-500 to-yellow-500 h-2.5 rounded-full transition-all duration-500";
