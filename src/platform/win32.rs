//! Win32 backend
//!
//! Handles are enumerated with `EnumWindows`, displays with
//! `EnumDisplayMonitors`. Window text is read into fixed buffers of
//! [`WINDOW_TEXT_CAPACITY`] units, so longer class names and titles come
//! back truncated.

use crate::models::{Display, RawRect, Rect, WindowHandle, WINDOW_TEXT_CAPACITY};
use crate::platform::WindowSystem;
use crate::{Result, WinTileError};
use std::ffi::c_void;
use tracing::trace;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOEXW,
    MONITORINFOF_PRIMARY,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetClassNameW, GetWindowRect, GetWindowTextW, MoveWindow,
};

/// Window system backed by user32/gdi32
#[derive(Debug, Default)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as usize as *mut c_void)
}

fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle::new(hwnd.0 as usize as u64)
}

fn rect_from_win32(rect: &RECT) -> Rect {
    Rect::new(
        rect.left,
        rect.top,
        rect.right - rect.left,
        rect.bottom - rect.top,
    )
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = &mut *(lparam.0 as *mut Vec<WindowHandle>);
    handles.push(from_hwnd(hwnd));
    TRUE
}

unsafe extern "system" fn collect_monitor(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let displays = &mut *(lparam.0 as *mut Vec<Display>);

    let mut info = MONITORINFOEXW {
        monitorInfo: MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFOEXW>() as u32,
            ..Default::default()
        },
        ..Default::default()
    };

    // Keep enumerating past a monitor that refuses to describe itself.
    if !GetMonitorInfoW(hmonitor, &mut info.monitorInfo).as_bool() {
        trace!("GetMonitorInfoW failed for monitor {:?}", hmonitor);
        return TRUE;
    }

    let name_len = info
        .szDevice
        .iter()
        .position(|&unit| unit == 0)
        .unwrap_or(info.szDevice.len());

    displays.push(Display::new(
        String::from_utf16_lossy(&info.szDevice[..name_len]),
        rect_from_win32(&info.monitorInfo.rcMonitor),
        rect_from_win32(&info.monitorInfo.rcWork),
        info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY != 0,
    ));

    TRUE
}

impl WindowSystem for Win32WindowSystem {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>> {
        let mut handles: Vec<WindowHandle> = Vec::new();
        unsafe {
            EnumWindows(
                Some(collect_window),
                LPARAM(&mut handles as *mut Vec<WindowHandle> as isize),
            )
            .map_err(|e| WinTileError::PlatformError(format!("EnumWindows failed: {e}")))?;
        }
        Ok(handles)
    }

    fn class_name(&self, handle: WindowHandle) -> Result<String> {
        let mut buffer = [0u16; WINDOW_TEXT_CAPACITY];
        let len = unsafe { GetClassNameW(to_hwnd(handle), &mut buffer) };
        if len <= 0 {
            return Err(WinTileError::PlatformError(format!(
                "GetClassNameW failed for window {handle}"
            ))
            .into());
        }

        Ok(String::from_utf16_lossy(&buffer[..len as usize]))
    }

    fn title(&self, handle: WindowHandle) -> Result<String> {
        // A zero length is indistinguishable from an empty title.
        let mut buffer = [0u16; WINDOW_TEXT_CAPACITY];
        let len = unsafe { GetWindowTextW(to_hwnd(handle), &mut buffer) };
        let len = len.max(0) as usize;
        Ok(String::from_utf16_lossy(&buffer[..len]))
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<RawRect> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(to_hwnd(handle), &mut rect) }.map_err(|e| {
            WinTileError::PlatformError(format!("GetWindowRect failed for window {handle}: {e}"))
        })?;

        Ok(RawRect::new(rect.left, rect.top, rect.right, rect.bottom))
    }

    fn displays(&self) -> Result<Vec<Display>> {
        let mut displays: Vec<Display> = Vec::new();
        let ok = unsafe {
            EnumDisplayMonitors(
                HDC::default(),
                None,
                Some(collect_monitor),
                LPARAM(&mut displays as *mut Vec<Display> as isize),
            )
        };

        if !ok.as_bool() {
            return Err(WinTileError::PlatformError("EnumDisplayMonitors failed".into()).into());
        }

        Ok(displays)
    }

    fn move_window(&self, handle: WindowHandle, frame: Rect, repaint: bool) -> Result<()> {
        unsafe {
            MoveWindow(
                to_hwnd(handle),
                frame.x,
                frame.y,
                frame.width,
                frame.height,
                BOOL::from(repaint),
            )
        }
        .map_err(|e| {
            WinTileError::PlatformError(format!("MoveWindow failed for window {handle}: {e}"))
        })?;

        Ok(())
    }
}
