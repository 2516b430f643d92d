//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use filedeck_core::FileKind;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuArrowUp as ArrowUp, LuBookOpen as FilePdf, LuCheck as Check,
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuClipboard as Paste,
        LuCode as FileCode, LuCopy as Copy, LuDownload as Download, LuFile as File,
        LuFileText as FileText, LuFolder as Folder, LuFolderOpen as FolderOpen,
        LuFolderPlus as NewFolder, LuHouse as Home, LuImage as FileImage, LuLayoutGrid as Grid,
        LuList as List, LuLoader as Pending, LuMenu as Menu, LuMusic as FileAudio,
        LuPencil as Edit, LuRefreshCw as Refresh, LuScissors as Cut, LuTrash2 as Trash,
        LuUpload as Upload, LuVideo as FileVideo, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowUp as ArrowUp, BsCheckLg as Check,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsClipboard as Paste,
        BsDownload as Download, BsFileEarmark as File, BsFileEarmarkCode as FileCode,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkText as FileText, BsFileEarmarkZip as FileArchive, BsFiles as Copy,
        BsFolder2Open as FolderOpen, BsFolderFill as Folder, BsFolderPlus as NewFolder,
        BsGrid as Grid, BsHourglassSplit as Pending, BsHouseFill as Home, BsList as Menu,
        BsListUl as List, BsPencil as Edit, BsScissors as Cut, BsTrash as Trash,
        BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(HOME, Home);
themed_icon!(MENU, Menu);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(NEW_FOLDER, NewFolder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(UPLOAD, Upload);
themed_icon!(DOWNLOAD, Download);
themed_icon!(CUT, Cut);
themed_icon!(COPY, Copy);
themed_icon!(PASTE, Paste);
themed_icon!(EDIT, Edit);
themed_icon!(TRASH, Trash);
themed_icon!(REFRESH, Refresh);
themed_icon!(GRID, Grid);
themed_icon!(LIST, List);
themed_icon!(CLOSE, Close);
themed_icon!(CHECK, Check);
themed_icon!(PENDING, Pending);

/// Icon for a record of the given kind.
pub fn for_kind(kind: FileKind) -> Icon {
    match kind {
        FileKind::Folder => FOLDER,
        FileKind::Image => FILE_IMAGE,
        FileKind::Video => FILE_VIDEO,
        FileKind::Audio => FILE_AUDIO,
        FileKind::Pdf => FILE_PDF,
        FileKind::Text => FILE_TEXT,
        FileKind::Code => FILE_CODE,
        FileKind::Archive => FILE_ARCHIVE,
        FileKind::Other => FILE,
    }
}
