//! Pointing reports exchanged with the firmware's HID layer.

use pimtrack_types::mouse_button::MouseButtons;
use usbd_hid::descriptor::MouseReport;

/// One tick of pointing output, with 16-bit motion and scroll fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointingReport {
    pub buttons: MouseButtons,
    pub x: i16,
    pub y: i16,
    /// Horizontal scroll
    pub h: i16,
    /// Vertical scroll
    pub v: i16,
}

impl PointingReport {
    pub fn has_motion(&self) -> bool {
        self.x != 0 || self.y != 0
    }

    /// Merge the reports of both halves into the one sent to the host.
    ///
    /// Motion and scroll are added with saturation, buttons are or-ed.
    pub fn combine(left: PointingReport, right: PointingReport) -> PointingReport {
        PointingReport {
            buttons: left.buttons | right.buttons,
            x: left.x.saturating_add(right.x),
            y: left.y.saturating_add(right.y),
            h: left.h.saturating_add(right.h),
            v: left.v.saturating_add(right.v),
        }
    }
}

fn clamp_i8(value: i16) -> i8 {
    value.clamp(i8::MIN as i16, i8::MAX as i16) as i8
}

impl From<PointingReport> for MouseReport {
    fn from(report: PointingReport) -> Self {
        MouseReport {
            buttons: report.buttons.into_bits(),
            x: clamp_i8(report.x),
            y: clamp_i8(report.y),
            wheel: clamp_i8(report.v),
            pan: clamp_i8(report.h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_saturates() {
        let left = PointingReport {
            buttons: MouseButtons::BUTTON1,
            x: i16::MAX,
            y: -3,
            h: 1,
            v: i16::MIN,
        };
        let right = PointingReport {
            buttons: MouseButtons::BUTTON2,
            x: 10,
            y: 5,
            h: 2,
            v: -1,
        };
        let combined = PointingReport::combine(left, right);
        assert_eq!(combined.x, i16::MAX);
        assert_eq!(combined.y, 2);
        assert_eq!(combined.h, 3);
        assert_eq!(combined.v, i16::MIN);
        assert!(combined.buttons.button1());
        assert!(combined.buttons.button2());
    }

    #[test]
    fn test_boot_report_clamps() {
        let report = PointingReport {
            buttons: MouseButtons::NONE,
            x: 300,
            y: -300,
            h: -2,
            v: 4,
        };
        let mouse: MouseReport = report.into();
        assert_eq!(mouse.x, 127);
        assert_eq!(mouse.y, -128);
        assert_eq!(mouse.pan, -2);
        assert_eq!(mouse.wheel, 4);
        assert_eq!(mouse.buttons, 0);
    }
}
